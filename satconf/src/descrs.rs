//! Registry of parameter descriptions.
use std::{
    collections::{btree_map, BTreeMap},
    fmt::{self, Write},
};

use thiserror::Error;

use crate::params::Params;

/// Kind of value an option holds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Bool,
    UInt,
    Double,
    Symbol,
}

impl ParamKind {
    /// Whether a value of kind `found` can be read as this kind.
    pub fn accepts(self, found: ParamKind) -> bool {
        self == found || (self == ParamKind::Double && found == ParamKind::UInt)
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ParamKind::Bool => "bool",
            ParamKind::UInt => "uint",
            ParamKind::Double => "double",
            ParamKind::Symbol => "symbol",
        })
    }
}

/// Possible errors while validating parameters against their descriptions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("unknown parameter '{}'", name)]
    UnknownParam { name: String },
    #[error(
        "parameter '{}' expects a value of type {} but got a value of type {}",
        name,
        expected,
        found
    )]
    KindMismatch {
        name: String,
        expected: ParamKind,
        found: ParamKind,
    },
}

/// Description of a single option.
#[derive(Clone, Debug, PartialEq)]
pub struct ParamDescr {
    /// Module the option belongs to, usable as a name prefix.
    pub module: &'static str,
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
    /// Rendered default value.
    pub default: String,
}

/// Descriptions of known options, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct ParamDescrs {
    descrs: BTreeMap<&'static str, ParamDescr>,
}

impl ParamDescrs {
    pub fn new() -> ParamDescrs {
        ParamDescrs::default()
    }

    /// Add a description, replacing an earlier one with the same name.
    pub fn insert(&mut self, descr: ParamDescr) {
        self.descrs.insert(descr.name, descr);
    }

    pub fn get(&self, name: &str) -> Option<&ParamDescr> {
        self.descrs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.descrs.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.descrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descrs.is_empty()
    }

    /// Iterate over all descriptions, sorted by name.
    pub fn iter(&self) -> btree_map::Values<'_, &'static str, ParamDescr> {
        self.descrs.values()
    }

    /// Find the description for a possibly module qualified option name.
    pub fn resolve(&self, name: &str) -> Option<&ParamDescr> {
        if let Some(descr) = self.get(name) {
            return Some(descr);
        }
        let dot = name.find('.')?;
        let (module, bare) = (&name[..dot], &name[dot + 1..]);
        self.get(bare).filter(|descr| descr.module == module)
    }

    /// Check that every option in `params` is described and holds a value of the described kind.
    pub fn validate(&self, params: &Params) -> Result<(), ParamsError> {
        for (name, value) in params.iter() {
            let descr = self
                .resolve(name)
                .ok_or_else(|| ParamsError::UnknownParam { name: name.clone() })?;
            if !descr.kind.accepts(value.kind()) {
                return Err(ParamsError::KindMismatch {
                    name: name.clone(),
                    expected: descr.kind,
                    found: value.kind(),
                });
            }
        }
        Ok(())
    }

    /// Human readable listing of all options.
    pub fn help(&self) -> String {
        let mut help = String::new();
        for descr in self.iter() {
            // Writing to a String cannot fail.
            let _ = writeln!(
                help,
                "{}: {} (default: {})",
                descr.name, descr.kind, descr.default
            );
            if !descr.description.is_empty() {
                let _ = writeln!(help, "    {}", descr.description);
            }
        }
        help
    }
}

impl<'a> IntoIterator for &'a ParamDescrs {
    type Item = &'a ParamDescr;
    type IntoIter = btree_map::Values<'a, &'static str, ParamDescr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
