//! The stored equation entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::coefficients::Coefficients;
use crate::format::coefficient;
use crate::ids::EquationId;
use crate::solver::{Solution, SolutionType, solve};

/// An equation `a·x² + b·x + c = 0` together with its solution.
///
/// The solution is derived from the coefficients on construction and on
/// every call to [`Equation::set_coefficients`]; it cannot be set directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    id: Option<EquationId>,
    coefficients: Coefficients,
    solution: Solution,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
}

impl Equation {
    /// Creates and solves an unsaved equation.
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self::from_coefficients(Coefficients::new(a, b, c))
    }

    /// Creates and solves an unsaved equation from validated coefficients.
    pub fn from_coefficients(coefficients: Coefficients) -> Self {
        Self {
            id: None,
            coefficients,
            solution: solve(coefficients.a, coefficients.b, coefficients.c),
            created_at: None,
            updated_at: None,
        }
    }

    /// Rebuilds a persisted equation from its stored columns.
    pub fn restore(
        id: EquationId,
        coefficients: Coefficients,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            created_at: Some(created_at),
            updated_at: Some(updated_at),
            ..Self::from_coefficients(coefficients)
        }
    }

    /// Replaces the coefficients and re-solves.
    pub fn set_coefficients(&mut self, coefficients: Coefficients) {
        self.coefficients = coefficients;
        self.solution = solve(coefficients.a, coefficients.b, coefficients.c);
    }

    /// Marks the equation as persisted under `id` at `at`.
    pub fn mark_saved(&mut self, id: EquationId, at: DateTime<Utc>) {
        self.id = Some(id);
        self.created_at.get_or_insert(at);
        self.updated_at = Some(at);
    }

    /// Storage identifier, if persisted.
    pub fn id(&self) -> Option<EquationId> {
        self.id
    }

    /// The coefficients.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Coefficient of `x²`.
    pub fn a(&self) -> f64 {
        self.coefficients.a
    }

    /// Coefficient of `x`.
    pub fn b(&self) -> f64 {
        self.coefficients.b
    }

    /// Constant term.
    pub fn c(&self) -> f64 {
        self.coefficients.c
    }

    /// Full solution.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// `b² − 4ac`, present iff `a ≠ 0`.
    pub fn discriminant(&self) -> Option<f64> {
        self.solution.discriminant
    }

    /// Classification tag.
    pub fn solution_type(&self) -> SolutionType {
        self.solution.solution_type
    }

    /// Human-readable solution text.
    pub fn solution_text(&self) -> &str {
        &self.solution.text
    }

    /// Creation timestamp, if persisted.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Last update timestamp, if persisted.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// The equation as stored: `"1.0x² + -5.0x + 6.0 = 0"`.
    pub fn equation_string(&self) -> String {
        format!(
            "{}x² + {}x + {} = 0",
            coefficient(self.a()),
            coefficient(self.b()),
            coefficient(self.c())
        )
    }

    /// Transport representation.
    pub fn to_record(&self) -> EquationRecord {
        EquationRecord {
            id: self.id,
            a: self.a(),
            b: self.b(),
            c: self.c(),
            solution: self.solution.text.clone(),
            discriminant: self.solution.discriminant,
            solution_type: self.solution.solution_type,
            equation_string: self.equation_string(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Equation {}, Solution: {}>",
            self.equation_string(),
            self.solution.text
        )
    }
}

/// Flat, serializable view of an [`Equation`].
///
/// Timestamps serialize as RFC 3339 strings, or `null` when unsaved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationRecord {
    /// Storage identifier.
    pub id: Option<EquationId>,
    /// Coefficient of `x²`.
    pub a: f64,
    /// Coefficient of `x`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
    /// Solution text.
    pub solution: String,
    /// `b² − 4ac`, or `null` when `a = 0`.
    pub discriminant: Option<f64>,
    /// Classification tag.
    pub solution_type: SolutionType,
    /// Stored equation string.
    pub equation_string: String,
    /// Creation timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Equation> for EquationRecord {
    fn from(equation: &Equation) -> Self {
        equation.to_record()
    }
}
