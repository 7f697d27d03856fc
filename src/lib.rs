//! # Sugeno Engine
//!
//! A zero-order Sugeno fuzzy inference engine: crisp inputs are fuzzified
//! through named membership functions, combined by AND/OR premise trees into
//! per-rule firing strengths, and defuzzified as the weighted average of the
//! rules' constant outputs.
//!
//! ## Quick Start
//!
//! ```rust
//! use sugeno::{FuzzySystem, InputVariable, Inputs, MembershipFunction, Rule, SugenoResult};
//!
//! fn main() -> SugenoResult<()> {
//!     let mut food = InputVariable::new("food", 0.0..=10.0);
//!     food.register("bad", MembershipFunction::triangular(0.0, 0.0, 5.0));
//!     food.register("good", MembershipFunction::triangular(5.0, 10.0, 10.0));
//!
//!     let system = FuzzySystem::new(vec![
//!         Rule::new(food.term("good")?, 15.0),
//!         Rule::new(food.term("bad")?, 0.0),
//!     ]);
//!
//!     let mut inputs = Inputs::new();
//!     inputs.insert("food", 8.0);
//!
//!     let tip = system.compute(&inputs)?;
//!     assert!(tip > 0.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Input variables
//! An [`InputVariable`] is a named domain with an inclusive valid range and a
//! registry of labelled membership functions (e.g. `"bad"`, `"good"`).
//!
//! ### Premises
//! [`InputVariable::term`] resolves a label into an expression leaf; leaves
//! compose into premise trees with [`Expr::and`] / [`Expr::or`] (or the `&`
//! and `|` operators).
//!
//! ### Rules and systems
//! A [`Rule`] pairs a premise tree with a constant crisp output. A
//! [`FuzzySystem`] aggregates its rules' `(weight, output)` pairs into one
//! crisp result.
//!
//! ### Error modes
//! [`FuzzySystem::compute`] is strict: missing or out-of-range inputs and a
//! zero total weight surface as typed [`SugenoError`]s.
//! [`FuzzySystem::compute_lenient`] never fails: it substitutes an
//! out-of-band crisp value for bad inputs, performs the raw IEEE division,
//! and reports what it degraded as diagnostics on the returned
//! [`Computation`].

pub mod error;
pub mod expression;
pub mod inputs;
pub mod membership;
pub mod rule;
pub mod system;
pub mod variable;

pub use error::SugenoError;
pub use expression::Expr;
pub use inputs::Inputs;
pub use membership::MembershipFunction;
pub use rule::Rule;
pub use system::{Computation, FuzzySystem};
pub use variable::InputVariable;

/// Result type for engine operations
pub type SugenoResult<T> = Result<T, SugenoError>;

#[cfg(test)]
mod tests;
