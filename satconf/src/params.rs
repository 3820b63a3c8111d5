//! Generic store of named option values.
use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Deserializer};

use crate::descrs::ParamKind;
use crate::schema::ParamValue;
use crate::symbol::Symbol;

/// Value of a single option.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    UInt(u32),
    Double(f64),
    Symbol(Symbol),
}

impl Value {
    pub fn kind(&self) -> ParamKind {
        match self {
            Value::Bool(_) => ParamKind::Bool,
            Value::UInt(_) => ParamKind::UInt,
            Value::Double(_) => ParamKind::Double,
            Value::Symbol(_) => ParamKind::Symbol,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Value {
        Value::UInt(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Double(value)
    }
}

impl From<Symbol> for Value {
    fn from(value: Symbol) -> Value {
        Value::Symbol(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Symbol(value.into())
    }
}

/// Named option values.
///
/// Names are free form. Options belonging to a schema can be qualified with the schema's module,
/// e.g. `sat.restart`, which takes precedence over the bare name when read through the schema.
/// See [`lookup_in`](Params::lookup_in).
///
/// Can be deserialized from a TOML document. Nested tables are flattened into dotted names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Params {
    entries: BTreeMap<String, Value>,
}

impl Params {
    /// Create an empty parameter store.
    pub fn new() -> Params {
        Params::default()
    }

    /// Set an option, replacing any previous value.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> &mut Params {
        self.entries.insert(name.to_owned(), value.into());
        self
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> &mut Params {
        self.set(name, value)
    }

    pub fn set_uint(&mut self, name: &str, value: u32) -> &mut Params {
        self.set(name, value)
    }

    pub fn set_double(&mut self, name: &str, value: f64) -> &mut Params {
        self.set(name, value)
    }

    pub fn set_symbol(&mut self, name: &str, value: impl Into<Symbol>) -> &mut Params {
        self.set(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all options, sorted by name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Overwrite options with the values set in `other`.
    pub fn merge(&mut self, other: &Params) {
        for (name, value) in other.iter() {
            self.entries.insert(name.clone(), value.clone());
        }
    }

    /// Typed value of an option.
    ///
    /// Returns `None` when the option is absent or holds a value of a different kind.
    pub fn get_as<T: ParamValue>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(T::from_value)
    }

    /// Typed value of an option belonging to `module`.
    ///
    /// The qualified name `<module>.<name>` is tried first, then the bare `name`.
    pub fn lookup_in<T: ParamValue>(&self, module: &str, name: &str) -> Option<T> {
        self.get_as(&format!("{}.{}", module, name))
            .or_else(|| self.get_as(name))
    }

    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get_as(name).unwrap_or(default)
    }

    pub fn get_uint(&self, name: &str, default: u32) -> u32 {
        self.get_as(name).unwrap_or(default)
    }

    /// Unsigned integer values are accepted as well.
    pub fn get_double(&self, name: &str, default: f64) -> f64 {
        self.get_as(name).unwrap_or(default)
    }

    pub fn get_symbol(&self, name: &str, default: &Symbol) -> Symbol {
        self.get_as(name).unwrap_or_else(|| default.clone())
    }

    fn insert_entries(&mut self, prefix: &str, entries: BTreeMap<String, Entry>) {
        for (key, entry) in entries {
            let name = if prefix.is_empty() {
                key
            } else {
                format!("{}.{}", prefix, key)
            };
            match entry {
                Entry::Value(value) => {
                    self.entries.insert(name, value);
                }
                Entry::Table(table) => self.insert_entries(&name, table),
            }
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A scalar option or a table of nested options.
#[derive(Deserialize)]
#[serde(untagged)]
enum Entry {
    Value(Value),
    Table(BTreeMap<String, Entry>),
}

impl<'de> Deserialize<'de> for Params {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Params, D::Error> {
        let entries = BTreeMap::<String, Entry>::deserialize(deserializer)?;
        let mut params = Params::new();
        params.insert_entries("", entries);
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_getters_use_default() {
        let mut params = Params::new();
        params.set_uint("gc_k", 12).set_bool("threads", true);

        assert_eq!(params.get_uint("gc_k", 7), 12);
        assert_eq!(params.get_uint("gc_initial", 20000), 20000);
        // kind mismatch
        assert_eq!(params.get_uint("threads", 1), 1);
        assert_eq!(params.get_bool("threads", false), true);
    }

    #[test]
    fn double_accepts_uint() {
        let mut params = Params::new();
        params.set_uint("restart_factor", 2);
        params.set_symbol("random_freq", "often");

        assert_eq!(params.get_double("restart_factor", 1.5), 2.0);
        assert_eq!(params.get_double("random_freq", 0.01), 0.01);
    }

    #[test]
    fn qualified_name_takes_precedence() {
        let mut params = Params::new();
        params.set_uint("random_seed", 9);

        assert_eq!(params.lookup_in::<u32>("sat", "random_seed"), Some(9));

        params.set_uint("sat.random_seed", 5);

        assert_eq!(params.lookup_in::<u32>("sat", "random_seed"), Some(5));
        assert_eq!(params.lookup_in::<u32>("smt", "random_seed"), Some(9));
        assert_eq!(params.lookup_in::<u32>("sat", "threads"), None);
    }

    #[test]
    fn merge_overwrites() {
        let mut base = Params::new();
        base.set_symbol("restart", "luby").set_uint("threads", 2);

        let mut update = Params::new();
        update.set_symbol("restart", "geometric");

        base.merge(&update);

        assert_eq!(base.get("restart"), Some(&Value::from("geometric")));
        assert_eq!(base.get("threads"), Some(&Value::UInt(2)));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn get_symbol_default() {
        let params = Params::new();
        let default = Symbol::from("vsids");

        assert_eq!(params.get_symbol("branching_heuristic", &default), "vsids");
    }
}
