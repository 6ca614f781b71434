//! Binding environment for the evaluator.
//!
//! A flat map from identifier to value. There is no scope chain: a function
//! call builds a fresh `Binding` holding its parameters and then merges the
//! caller's bindings underneath, so parameters shadow caller names while the
//! callee still sees everything visible at the call site.

use rustc_hash::FxHashMap;

use ember_ir::Name;

use crate::Value;

/// Mutable mapping from names to values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Binding {
    /// `FxHashMap` for faster hashing with `Name` keys.
    bindings: FxHashMap<Name, Value>,
}

impl Binding {
    /// Create an empty binding.
    pub fn new() -> Self {
        Binding {
            bindings: FxHashMap::default(),
        }
    }

    /// Insert or overwrite a binding.
    #[inline]
    pub fn set(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Look up a name.
    #[inline]
    pub fn get(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    #[inline]
    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Add every binding of `other` whose name is not already bound here.
    ///
    /// Existing entries are never overwritten. Function values are shared,
    /// not deep-copied.
    pub fn merge(&mut self, other: &Binding) {
        for (name, value) in &other.bindings {
            self.bindings
                .entry(*name)
                .or_insert_with(|| value.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over all bindings in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Name, &Value)> {
        self.bindings.iter().map(|(name, value)| (*name, value))
    }
}

impl FromIterator<(Name, Value)> for Binding {
    fn from_iter<I: IntoIterator<Item = (Name, Value)>>(iter: I) -> Self {
        Binding {
            bindings: iter.into_iter().collect(),
        }
    }
}
