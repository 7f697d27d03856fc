//! Premise expression trees
//!
//! A premise is a binary tree of AND/OR combinators over
//! variable-fuzzification leaves. Evaluation is a pure recursive walk: AND
//! takes the minimum of its children, OR the maximum, and a leaf fuzzifies
//! the named variable's crisp input through its resolved membership
//! function.

use crate::inputs::Inputs;
use crate::membership::MembershipFunction;
use crate::{SugenoError, SugenoResult};
use std::ops::{BitAnd, BitOr, RangeInclusive};
use std::sync::Arc;

/// Crisp stand-in substituted for a missing or out-of-range input in lenient
/// evaluation. It is fed through the membership function like any other
/// value, it is not itself a degree.
const SENTINEL_INPUT: f64 = -1.0;

/// A node of a rule premise.
///
/// Leaves are built with [`InputVariable::term`](crate::InputVariable::term);
/// interior nodes with [`Expr::and`] / [`Expr::or`] or the `&` / `|`
/// operators. Trees are built bottom-up and every node has exactly one
/// parent; only the membership function behind a leaf is shared.
#[derive(Debug, Clone)]
pub enum Expr {
    /// Fuzzification of one variable through one membership function,
    /// both resolved when the term was built.
    Term {
        variable: Arc<str>,
        range: RangeInclusive<f64>,
        membership: Arc<MembershipFunction>,
    },
    /// Minimum of both children.
    And(Box<Expr>, Box<Expr>),
    /// Maximum of both children.
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Combine two premises: the result holds when both hold.
    pub fn and(self, rhs: Expr) -> Expr {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    /// Combine two premises: the result holds when either holds.
    pub fn or(self, rhs: Expr) -> Expr {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    /// Evaluate the tree to a degree in `[0, 1]` (strict mode).
    ///
    /// A leaf whose variable is absent from `inputs` fails with
    /// [`SugenoError::MissingInput`]; a supplied value outside the
    /// variable's range fails with [`SugenoError::OutOfRange`]. Combinators
    /// evaluate left then right and always evaluate both children; when both
    /// fail, the left error is reported.
    pub fn evaluate(&self, inputs: &Inputs) -> SugenoResult<f64> {
        match self {
            Expr::Term {
                variable,
                range,
                membership,
            } => {
                let value = Self::crisp_value(variable, range, inputs)?;
                Ok(membership.fuzzify(value))
            }
            Expr::And(left, right) => {
                let left = left.evaluate(inputs);
                let right = right.evaluate(inputs);
                Ok(left?.min(right?))
            }
            Expr::Or(left, right) => {
                let left = left.evaluate(inputs);
                let right = right.evaluate(inputs);
                Ok(left?.max(right?))
            }
        }
    }

    /// Evaluate the tree without failing (lenient mode).
    ///
    /// A missing or out-of-range input records a diagnostic and fuzzifies an
    /// out-of-band stand-in value (`-1.0`) in place of the real one, so a
    /// bad leaf degrades the result instead of aborting it. Both children of
    /// every combinator are evaluated, so diagnostics from both branches are
    /// collected.
    pub fn evaluate_lenient(&self, inputs: &Inputs, diagnostics: &mut Vec<SugenoError>) -> f64 {
        match self {
            Expr::Term {
                variable,
                range,
                membership,
            } => {
                let value = match Self::crisp_value(variable, range, inputs) {
                    Ok(value) => value,
                    Err(err) => {
                        diagnostics.push(err);
                        SENTINEL_INPUT
                    }
                };
                membership.fuzzify(value)
            }
            Expr::And(left, right) => {
                let left = left.evaluate_lenient(inputs, diagnostics);
                let right = right.evaluate_lenient(inputs, diagnostics);
                left.min(right)
            }
            Expr::Or(left, right) => {
                let left = left.evaluate_lenient(inputs, diagnostics);
                let right = right.evaluate_lenient(inputs, diagnostics);
                left.max(right)
            }
        }
    }

    fn crisp_value(
        variable: &Arc<str>,
        range: &RangeInclusive<f64>,
        inputs: &Inputs,
    ) -> SugenoResult<f64> {
        let value = inputs
            .get(variable)
            .ok_or_else(|| SugenoError::MissingInput {
                variable: variable.to_string(),
            })?;

        if !range.contains(&value) {
            return Err(SugenoError::OutOfRange {
                variable: variable.to_string(),
                value,
                min: *range.start(),
                max: *range.end(),
            });
        }

        Ok(value)
    }
}

impl BitAnd for Expr {
    type Output = Expr;

    fn bitand(self, rhs: Expr) -> Expr {
        self.and(rhs)
    }
}

impl BitOr for Expr {
    type Output = Expr;

    fn bitor(self, rhs: Expr) -> Expr {
        self.or(rhs)
    }
}
