//! Membership functions
//!
//! A membership function maps a crisp value to a degree of membership in
//! `[0, 1]` for one linguistic label of a variable. The shapes form a closed
//! set; there is no open trait to implement, premises only ever fuzzify
//! through one of these variants.

use serde::{Deserialize, Serialize};

/// A membership function shape over a variable's domain.
///
/// Control points are documented preconditions, not runtime-checked:
/// triangular requires `a <= b <= c`, trapezoidal requires
/// `a <= b <= c <= d`. Violating them produces whatever the piecewise
/// arithmetic yields, with ordinary IEEE semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MembershipFunction {
    /// Degenerate band: membership is 1.0 only at exactly `start`. The `end`
    /// bound is part of the definition but does not widen the band.
    Rectangular { start: f64, end: f64 },
    /// Piecewise-linear peak at `b`, rising from `a`, falling to `c`.
    Triangular { a: f64, b: f64, c: f64 },
    /// Piecewise-linear plateau on `[b, c]`, rising from `a`, falling to `d`.
    Trapezoidal { a: f64, b: f64, c: f64, d: f64 },
}

impl MembershipFunction {
    /// Rectangular band starting at `start`.
    ///
    /// Note the degenerate membership test: `fuzzify` returns 1.0 only when
    /// the crisp value equals `start` exactly, never for the rest of
    /// `[start, end]`.
    pub fn rectangular(start: f64, end: f64) -> Self {
        Self::Rectangular { start, end }
    }

    /// Triangular shape with peak `b`. Precondition: `a <= b <= c`.
    pub fn triangular(a: f64, b: f64, c: f64) -> Self {
        Self::Triangular { a, b, c }
    }

    /// Trapezoidal shape with plateau `[b, c]`. Precondition:
    /// `a <= b <= c <= d`.
    pub fn trapezoidal(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self::Trapezoidal { a, b, c, d }
    }

    /// Map a crisp value to its degree of membership.
    ///
    /// Pure and deterministic. The result is in `[0, 1]` for well-formed
    /// control points; it is never clamped.
    pub fn fuzzify(&self, x: f64) -> f64 {
        match *self {
            Self::Rectangular { start, end: _ } => {
                if start <= x && x <= start {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Triangular { a, b, c } => {
                // The peak is tested first, so a == b or b == c never
                // reaches a dividing branch with a nonempty guard.
                if x == b {
                    1.0
                } else if a <= x && x <= b {
                    (x - a) / (b - a)
                } else if b <= x && x <= c {
                    (c - x) / (c - b)
                } else {
                    0.0
                }
            }
            Self::Trapezoidal { a, b, c, d } => {
                if b <= x && x <= c {
                    1.0
                } else if a <= x && x < b {
                    (x - a) / (b - a)
                } else if c < x && x < d {
                    (d - x) / (d - c)
                } else {
                    0.0
                }
            }
        }
    }
}
