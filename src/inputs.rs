//! Crisp input values, keyed by variable name.

use std::collections::HashMap;

/// The crisp inputs for one evaluation: one entry per input variable
/// referenced anywhere in the rule set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs(HashMap<String, f64>);

impl Inputs {
    pub fn new() -> Self {
        Inputs(HashMap::new())
    }

    /// Set the crisp value for a variable, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// The crisp value for a variable, if one was supplied.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Inputs {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Inputs(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl<S: Into<String>> Extend<(S, f64)> for Inputs {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}
