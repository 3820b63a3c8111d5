//! Strategy selections made by symbol valued options.
use std::fmt;

use super::SatParamError;

/// Declares an enum selected by a fixed set of tokens of a symbol option.
macro_rules! symbol_choice {
    (
        $(#[$attr:meta])*
        pub enum $name:ident = $param:literal {
            $(
                $(#[$variant_attr:meta])*
                $variant:ident = $token:literal,
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$variant_attr])*
                $variant,
            )*
        }

        impl $name {
            /// Name of the option making this selection.
            pub const PARAM: &'static str = $param;

            /// Accepted tokens.
            pub const TOKENS: &'static [&'static str] = &[$($token),*];

            /// All variants, in the order of [`TOKENS`](Self::TOKENS).
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Variant selected by the given token, matched case-sensitively.
            pub fn from_token(token: &str) -> Option<$name> {
                match token {
                    $($token => Some($name::$variant),)*
                    _ => None,
                }
            }

            /// Like [`from_token`](Self::from_token) but fails with an error naming the option.
            pub fn parse(token: &str) -> Result<$name, SatParamError> {
                $name::from_token(token).ok_or_else(|| SatParamError::InvalidValue {
                    param: $param,
                    value: token.to_owned(),
                    accepted: $name::TOKENS,
                })
            }

            /// Token selecting this variant.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)*
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

symbol_choice! {
    /// When to restart the search.
    pub enum RestartStrategy = "restart" {
        /// Restart intervals follow the Luby sequence.
        Luby = "luby",
        /// Restart intervals grow by a constant factor.
        Geometric = "geometric",
    }
}

symbol_choice! {
    /// Initial polarity of decision variables.
    pub enum PhaseSelection = "phase" {
        AlwaysFalse = "always_false",
        AlwaysTrue = "always_true",
        /// Reuse the last assigned polarity.
        Caching = "caching",
        Random = "random",
    }
}

symbol_choice! {
    /// Scoring used when deleting learned clauses.
    pub enum GcStrategy = "gc" {
        /// PSM with dynamic freezing of inactive clauses.
        DynPsm = "dyn_psm",
        /// Glue first, PSM as tie breaker.
        GluePsm = "glue_psm",
        Glue = "glue",
        Psm = "psm",
        /// PSM first, glue as tie breaker.
        PsmGlue = "psm_glue",
    }
}

symbol_choice! {
    /// Reward used by the lookahead solver to rank candidate literals.
    pub enum RewardType = "lookahead_reward" {
        HeuleSchur = "heule_schur",
        HeuleUnit = "heuleu",
        Ternary = "ternary",
        UnitLiteral = "unit",
        MarchCu = "march_cu",
    }
}

symbol_choice! {
    /// Variable scoring used for branching decisions.
    pub enum BranchingHeuristic = "branching_heuristic" {
        Vsids = "vsids",
        /// Conflict history based branching.
        Chb = "chb",
        /// Learning rate based branching.
        Lrb = "lrb",
    }
}

symbol_choice! {
    /// Handling of pseudo-boolean constraints.
    pub enum PbSolver = "pb_solver" {
        /// Arithmetic circuit encoding.
        Circuit = "circuit",
        /// Sorting network encoding.
        Sorting = "sorting",
        /// Totalizer encoding.
        Totalizer = "totalizer",
        /// Native constraint propagation.
        Solver = "solver",
    }
}
