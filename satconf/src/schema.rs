//! Typed views of a parameter store.
//!
//! A schema is a plain struct with one field per option. Deriving [`DocDefault`] and
//! [`ParamSchema`] makes the field's doc comment the single source of its default value and
//! description:
//!
//! ```
//! use satconf::schema::{DocDefault, ParamSchema};
//! use satconf::Params;
//!
//! #[derive(DocDefault, ParamSchema)]
//! #[param_module = "demo"]
//! struct DemoParams {
//!     /// Number of worker threads. (Default: 1)
//!     threads: u32,
//! }
//!
//! let mut params = Params::new();
//! params.set_uint("demo.threads", 4);
//! assert_eq!(DemoParams::from_params(&params).threads, 4);
//! ```
pub use satconf_macros::{DocDefault, ParamSchema};

use crate::descrs::{ParamDescrs, ParamKind};
use crate::params::{Params, Value};
use crate::symbol::Symbol;

/// Types that can be stored as an option value.
pub trait ParamValue: Sized {
    const KIND: ParamKind;

    /// Extract a value of this type, `None` if the value has a different kind.
    fn from_value(value: &Value) -> Option<Self>;

    /// Text used for the default value in parameter descriptions.
    fn render(&self) -> String;
}

impl ParamValue for bool {
    const KIND: ParamKind = ParamKind::Bool;

    fn from_value(value: &Value) -> Option<bool> {
        match *value {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for u32 {
    const KIND: ParamKind = ParamKind::UInt;

    fn from_value(value: &Value) -> Option<u32> {
        match *value {
            Value::UInt(value) => Some(value),
            _ => None,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for f64 {
    const KIND: ParamKind = ParamKind::Double;

    fn from_value(value: &Value) -> Option<f64> {
        match *value {
            Value::Double(value) => Some(value),
            Value::UInt(value) => Some(value as f64),
            _ => None,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

impl ParamValue for Symbol {
    const KIND: ParamKind = ParamKind::Symbol;

    fn from_value(value: &Value) -> Option<Symbol> {
        match value {
            Value::Symbol(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn render(&self) -> String {
        format!("{:?}", self.as_str())
    }
}

/// A struct of options read from a [`Params`] store.
///
/// Usually derived, see the [module documentation](self).
pub trait ParamSchema: Default {
    /// Module name accepted as option name prefix.
    const MODULE: &'static str;

    /// Read all options, using the default for absent options or values of the wrong kind.
    fn from_params(params: &Params) -> Self;

    /// Add a description for every option of this schema.
    fn collect_param_descrs(descrs: &mut ParamDescrs);
}
