//! Error types for the inference engine
//!
//! One closed taxonomy covers both lifecycle stages: `UnknownLabel` can only
//! arise while a system is being built (resolving a membership-function
//! label), everything else arises while evaluating inputs.

use thiserror::Error;

/// Error raised while building or evaluating a fuzzy system.
///
/// In strict evaluation these propagate out of
/// [`FuzzySystem::compute`](crate::FuzzySystem::compute); in lenient
/// evaluation the input errors are collected as diagnostics on the
/// [`Computation`](crate::Computation) instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SugenoError {
    /// No membership function with the requested label is registered on the
    /// variable. Raised when a premise term is built, never during
    /// evaluation.
    #[error("variable `{variable}` has no membership function labelled `{label}`")]
    UnknownLabel { variable: String, label: String },

    /// The input map has no entry for a variable referenced by a premise.
    #[error("no input supplied for variable `{variable}`")]
    MissingInput { variable: String },

    /// The supplied crisp value falls outside the variable's declared range.
    #[error("input {value} for variable `{variable}` is outside its range [{min}, {max}]")]
    OutOfRange {
        variable: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Every rule premise evaluated to zero weight, so the weighted average
    /// has a zero denominator.
    #[error("no rule fired: all premises evaluated to zero weight")]
    NoRuleFired,

    /// The weighted average came out non-finite, which can only happen with
    /// degenerate membership-function parameters.
    #[error("computed output {value} is not finite")]
    NonFinite { value: f64 },
}
