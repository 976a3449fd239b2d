//! Closed-form solver for `a·x² + b·x + c = 0`.
//!
//! [`solve`] is pure and total: every real input yields a [`Solution`], and
//! the same input always yields the same output. Branching compares against
//! zero with exact floating-point equality, so inputs whose discriminant is a
//! rounding error away from zero are classified by the sign of that error.
//!
//! ```
//! use equa_core::{solve, SolutionType};
//!
//! let s = solve(1.0, -5.0, 6.0);
//! assert_eq!(s.solution_type, SolutionType::TwoReal);
//! assert_eq!(s.discriminant, Some(1.0));
//! assert_eq!(s.text, "x₁ = 3.000000, x₂ = 2.000000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;
use crate::format::fixed;

// ============================================================================
// SolutionType
// ============================================================================

/// Classification of an equation's solution set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionType {
    /// Two distinct real roots (`D > 0`).
    TwoReal,
    /// One repeated real root (`D = 0`).
    OneReal,
    /// A complex conjugate pair (`D < 0`).
    Complex,
    /// `a = 0, b ≠ 0`: a single linear root.
    Linear,
    /// `a = b = c = 0`: every real number is a solution.
    Infinite,
    /// `a = b = 0, c ≠ 0`: no solution.
    None,
}

impl SolutionType {
    /// All solution types, in classification order.
    pub const ALL: [SolutionType; 6] = [
        SolutionType::TwoReal,
        SolutionType::OneReal,
        SolutionType::Complex,
        SolutionType::Linear,
        SolutionType::Infinite,
        SolutionType::None,
    ];

    /// The stable tag used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoReal => "two_real",
            Self::OneReal => "one_real",
            Self::Complex => "complex",
            Self::Linear => "linear",
            Self::Infinite => "infinite",
            Self::None => "none",
        }
    }

    /// Returns `true` for the three genuinely quadratic classifications.
    pub fn is_quadratic(&self) -> bool {
        matches!(self, Self::TwoReal | Self::OneReal | Self::Complex)
    }
}

impl fmt::Display for SolutionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolutionType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::validation_field("solution_type", format!("unknown solution type '{s}'")))
    }
}

// ============================================================================
// Roots
// ============================================================================

/// Typed view of the roots behind a [`Solution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Roots {
    /// `x₁ = (−b + √D)/2a`, `x₂ = (−b − √D)/2a`.
    TwoReal {
        /// Root taken with `+√D`.
        x1: f64,
        /// Root taken with `−√D`.
        x2: f64,
    },
    /// `x = −b/2a`.
    Repeated {
        /// The repeated root.
        x: f64,
    },
    /// `re ± im·i`.
    Complex {
        /// Real part, `−b/2a`.
        re: f64,
        /// Imaginary part, `√(−D)/2a`.
        im: f64,
    },
    /// `x = −c/b`.
    Linear {
        /// The single root.
        x: f64,
    },
    /// Every real number.
    Infinite,
    /// No solution.
    None,
}

impl Roots {
    /// The classification matching this set of roots.
    pub fn solution_type(&self) -> SolutionType {
        match self {
            Self::TwoReal { .. } => SolutionType::TwoReal,
            Self::Repeated { .. } => SolutionType::OneReal,
            Self::Complex { .. } => SolutionType::Complex,
            Self::Linear { .. } => SolutionType::Linear,
            Self::Infinite => SolutionType::Infinite,
            Self::None => SolutionType::None,
        }
    }

    /// Renders the roots in the canonical solution-text form.
    pub fn describe(&self) -> String {
        match *self {
            Self::TwoReal { x1, x2 } => format!("x₁ = {}, x₂ = {}", fixed(x1), fixed(x2)),
            Self::Repeated { x } => format!("x = {} (repeated root)", fixed(x)),
            Self::Complex { re, im } => {
                let (re, im) = (fixed(re), fixed(im));
                format!("x₁ = {re} + {im}i, x₂ = {re} - {im}i")
            }
            Self::Linear { x } => format!("x = {}", fixed(x)),
            Self::Infinite => "Infinite solutions (0 = 0)".to_string(),
            Self::None => "No solution (contradiction)".to_string(),
        }
    }
}

// ============================================================================
// Solution
// ============================================================================

/// Result of solving one equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    /// `b² − 4ac`; present iff `a ≠ 0`.
    pub discriminant: Option<f64>,
    /// Classification tag.
    pub solution_type: SolutionType,
    /// Human-readable description of the roots.
    pub text: String,
    /// Structured roots.
    pub roots: Roots,
}

impl Solution {
    fn new(discriminant: Option<f64>, roots: Roots) -> Self {
        Self {
            discriminant,
            solution_type: roots.solution_type(),
            text: roots.describe(),
            roots,
        }
    }
}

/// Solves `a·x² + b·x + c = 0`.
pub fn solve(a: f64, b: f64, c: f64) -> Solution {
    if a == 0.0 {
        let roots = if b == 0.0 {
            if c == 0.0 { Roots::Infinite } else { Roots::None }
        } else {
            Roots::Linear { x: -c / b }
        };
        return Solution::new(None, roots);
    }

    let d = b * b - 4.0 * a * c;

    let roots = if d > 0.0 {
        let sqrt_d = d.sqrt();
        Roots::TwoReal {
            x1: (-b + sqrt_d) / (2.0 * a),
            x2: (-b - sqrt_d) / (2.0 * a),
        }
    } else if d == 0.0 {
        Roots::Repeated { x: -b / (2.0 * a) }
    } else {
        Roots::Complex {
            re: -b / (2.0 * a),
            im: (-d).sqrt() / (2.0 * a),
        }
    };

    Solution::new(Some(d), roots)
}

// ============================================================================
// Tests
// ============================================================================
