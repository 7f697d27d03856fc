//! The fuzzy system: rule aggregation by weighted average
//!
//! `compute` walks the rules in stored order, accumulating
//! `numerator += weight * output` and `denominator += weight`, and returns
//! `numerator / denominator`. Addition makes the result independent of rule
//! order up to floating-point rounding.

use crate::inputs::Inputs;
use crate::rule::Rule;
use crate::{SugenoError, SugenoResult};

/// An immutable, ordered collection of rules.
///
/// Evaluation is a pure read-only query, so one system can serve concurrent
/// callers without locking.
#[derive(Debug, Clone)]
pub struct FuzzySystem {
    rules: Vec<Rule>,
}

/// Outcome of a lenient computation: the raw weighted average plus every
/// input problem that was degraded along the way.
#[derive(Debug, Clone)]
pub struct Computation {
    /// The weighted average, computed with ordinary IEEE division. With no
    /// firing rule this is NaN (0/0).
    pub value: f64,
    /// Missing-input and out-of-range conditions encountered during
    /// evaluation, in premise order.
    pub diagnostics: Vec<SugenoError>,
}

impl Computation {
    /// Whether the value can be used as-is: no input was degraded and the
    /// division came out finite.
    pub fn is_reliable(&self) -> bool {
        self.diagnostics.is_empty() && self.value.is_finite()
    }
}

impl FuzzySystem {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Compute the crisp output for the given inputs (strict mode).
    ///
    /// Any missing or out-of-range input fails the whole computation with
    /// the corresponding [`SugenoError`]. A zero total weight fails with
    /// [`SugenoError::NoRuleFired`], and a non-finite quotient (possible
    /// only with degenerate membership-function parameters) fails with
    /// [`SugenoError::NonFinite`], so a strict result is always a finite,
    /// meaningful number.
    pub fn compute(&self, inputs: &Inputs) -> SugenoResult<f64> {
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for rule in &self.rules {
            let weight = rule.evaluate(inputs)?;
            numerator += weight * rule.output();
            denominator += weight;
        }

        if denominator == 0.0 {
            return Err(SugenoError::NoRuleFired);
        }

        let value = numerator / denominator;

        if !value.is_finite() {
            return Err(SugenoError::NonFinite { value });
        }

        Ok(value)
    }

    /// Compute the crisp output without failing (lenient mode).
    ///
    /// Bad inputs are substituted per leaf (see
    /// [`Expr::evaluate_lenient`](crate::Expr::evaluate_lenient)) and the
    /// division is performed as-is, so the value may be NaN or infinite.
    /// Callers should check [`Computation::is_reliable`] before trusting it.
    pub fn compute_lenient(&self, inputs: &Inputs) -> Computation {
        let mut diagnostics = Vec::new();
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for rule in &self.rules {
            let weight = rule.evaluate_lenient(inputs, &mut diagnostics);
            numerator += weight * rule.output();
            denominator += weight;
        }

        Computation {
            value: numerator / denominator,
            diagnostics,
        }
    }
}
