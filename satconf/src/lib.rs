//! Satconf turns a loosely typed set of named options into the validated configuration of a
//! [CDCL][cdcl] SAT solver.
//!
//! Options are collected in a [`Params`] store, read through typed schema views like
//! [`SatParams`](sat_params::SatParams) and resolved into a [`SatConfig`]. Every enumerated option
//! is checked against its accepted tokens, composite flags are derived and a few internal
//! tunables are filled in.
//!
//! ```
//! use satconf::{Params, SatConfig};
//! use satconf::config::RestartStrategy;
//!
//! let mut params = Params::new();
//! params.set_symbol("restart", "geometric");
//!
//! let config = SatConfig::new(&params).unwrap();
//! assert_eq!(config.restart, RestartStrategy::Geometric);
//! ```
//!
//! [cdcl]: https://en.wikipedia.org/wiki/Conflict-Driven_Clause_Learning

// Lets the schema derives refer to this crate as `::satconf` from inside it.
extern crate self as satconf;

pub mod config;
pub mod descrs;
pub mod params;
pub mod sat_params;
pub mod schema;
pub mod symbol;
pub mod util;


pub use config::{SatConfig, SatParamError};
pub use descrs::{ParamDescrs, ParamsError};
pub use params::{Params, Value};
pub use symbol::Symbol;
