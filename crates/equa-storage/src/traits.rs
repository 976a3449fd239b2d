//! Storage abstraction.

use async_trait::async_trait;
use equa_core::{Equation, EquationId, EquationRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Result;

/// Aggregate view over all stored equations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationStats {
    /// Number of stored equations.
    pub total_equations: u64,
    /// Count per solution type tag; types with no equations are absent.
    pub by_solution_type: BTreeMap<String, u64>,
    /// Most recently created equation.
    pub latest_equation: Option<EquationRecord>,
}

/// Persistence for [`Equation`] values.
///
/// Implementations assign ids and timestamps. Listing order is newest first.
#[async_trait]
pub trait EquationStore: Send + Sync {
    /// Short backend name for logs (`"sqlite"`, `"memory"`).
    fn backend(&self) -> &'static str;

    /// Creates the equations table if it does not exist.
    async fn init_schema(&self) -> Result<()>;

    /// Round-trips a trivial query; returns its value (always `1`).
    async fn ping(&self) -> Result<i64>;

    /// Persists a new equation and returns it with id and timestamps set.
    async fn insert(&self, equation: Equation) -> Result<Equation>;

    /// Fetches one equation.
    async fn get(&self, id: EquationId) -> Result<Option<Equation>>;

    /// Fetches every equation, newest first.
    async fn list(&self) -> Result<Vec<Equation>>;

    /// Overwrites the coefficients and derived fields of `id` with those of
    /// `equation`. Returns `None` when no such row exists.
    async fn update(&self, id: EquationId, equation: &Equation) -> Result<Option<Equation>>;

    /// Removes one equation and returns what was removed.
    async fn delete(&self, id: EquationId) -> Result<Option<Equation>>;

    /// Counts equations by solution type.
    async fn stats(&self) -> Result<EquationStats>;
}
