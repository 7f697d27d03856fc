//! Input variables
//!
//! An input variable is a named domain with an inclusive valid range and a
//! registry of labelled membership functions. Registration is a
//! construction-time activity; once a system is built the variable is only
//! read.

use crate::expression::Expr;
use crate::membership::MembershipFunction;
use crate::{SugenoError, SugenoResult};
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// A named linguistic input variable.
#[derive(Debug, Clone)]
pub struct InputVariable {
    name: Arc<str>,
    range: RangeInclusive<f64>,
    membership: HashMap<String, Arc<MembershipFunction>>,
}

impl InputVariable {
    /// Create a variable over an inclusive range of valid crisp values.
    pub fn new(name: impl Into<Arc<str>>, range: RangeInclusive<f64>) -> Self {
        Self {
            name: name.into(),
            range,
            membership: HashMap::new(),
        }
    }

    /// The variable's name, used as the key into the input map.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The inclusive range of valid crisp values.
    pub fn range(&self) -> &RangeInclusive<f64> {
        &self.range
    }

    /// Register a membership function under a label, replacing any previous
    /// function with the same label. Terms built before the replacement keep
    /// the function they resolved.
    pub fn register(&mut self, label: impl Into<String>, function: MembershipFunction) {
        self.membership.insert(label.into(), Arc::new(function));
    }

    /// Look up a registered membership function by label.
    pub fn membership_function(
        &self,
        label: &str,
    ) -> SugenoResult<&Arc<MembershipFunction>> {
        self.membership
            .get(label)
            .ok_or_else(|| SugenoError::UnknownLabel {
                variable: self.name.to_string(),
                label: label.to_string(),
            })
    }

    /// Build a premise leaf that fuzzifies this variable through the
    /// membership function registered under `label`.
    ///
    /// The label is resolved here, so an unregistered label fails the build
    /// of the system rather than its evaluation.
    pub fn term(&self, label: &str) -> SugenoResult<Expr> {
        let membership = self.membership_function(label)?;

        Ok(Expr::Term {
            variable: Arc::clone(&self.name),
            range: self.range.clone(),
            membership: Arc::clone(membership),
        })
    }

    /// Whether a crisp value lies within the declared range, inclusive on
    /// both ends.
    pub fn is_within_range(&self, value: f64) -> bool {
        self.range.contains(&value)
    }
}
