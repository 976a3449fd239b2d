//! Equa Core: equation model, solver, and validation.
//!
//! This crate has no internal Equa dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`solver`]: closed-form solver for `a·x² + b·x + c = 0`
//! - [`equation`]: the stored `Equation` entity and its transport record
//! - [`coefficients`]: coefficient extraction from JSON payloads
//! - [`explain`]: step-by-step derivation of a solution
//! - [`format`]: number and equation formatting helpers
//! - [`error`]: Error types and Result alias

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod coefficients;
pub mod equation;
pub mod error;
pub mod explain;
pub mod format;
pub mod ids;
pub mod solver;

mod proptests;

// Re-export key types at crate root for convenience
pub use coefficients::{
    Coefficients, DISCRIMINANT_OVERFLOW_MESSAGE, INVALID_NUMBERS_MESSAGE, REQUIRED_FIELDS,
    parse_coefficient,
};
pub use equation::{Equation, EquationRecord};
pub use error::{Error, Result};
pub use explain::explain;
pub use format::pretty_equation;
pub use ids::EquationId;
pub use solver::{Roots, Solution, SolutionType, solve};
