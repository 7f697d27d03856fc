//! Rules
//!
//! A rule pairs a premise tree with a constant crisp output (zero-order
//! Sugeno: the output never depends on the inputs).

use crate::expression::Expr;
use crate::inputs::Inputs;
use crate::{SugenoError, SugenoResult};

/// One inference rule: `premise -> output`.
#[derive(Debug, Clone)]
pub struct Rule {
    premise: Expr,
    output: f64,
}

impl Rule {
    pub fn new(premise: Expr, output: f64) -> Self {
        Self { premise, output }
    }

    pub fn premise(&self) -> &Expr {
        &self.premise
    }

    /// The constant crisp output, read verbatim during aggregation.
    pub fn output(&self) -> f64 {
        self.output
    }

    /// The rule's firing strength for the given inputs (strict mode).
    pub fn evaluate(&self, inputs: &Inputs) -> SugenoResult<f64> {
        self.premise.evaluate(inputs)
    }

    /// The rule's firing strength with sentinel substitution for bad inputs
    /// (lenient mode).
    pub fn evaluate_lenient(&self, inputs: &Inputs, diagnostics: &mut Vec<SugenoError>) -> f64 {
        self.premise.evaluate_lenient(inputs, diagnostics)
    }
}
