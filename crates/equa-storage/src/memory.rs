//! In-memory storage backend.

use async_trait::async_trait;
use chrono::Utc;
use equa_core::{Equation, EquationId};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::Result;
use crate::traits::{EquationStats, EquationStore};

/// Equation store held entirely in process memory.
///
/// Ids start at 1 and are never reused, matching an autoincrement column.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    rows: BTreeMap<EquationId, Equation>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EquationStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn init_schema(&self) -> Result<()> {
        Ok(())
    }

    async fn ping(&self) -> Result<i64> {
        Ok(1)
    }

    async fn insert(&self, mut equation: Equation) -> Result<Equation> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let id = EquationId::new(inner.last_id);
        equation.mark_saved(id, Utc::now());
        inner.rows.insert(id, equation.clone());
        tracing::debug!(%id, "stored equation in memory");
        Ok(equation)
    }

    async fn get(&self, id: EquationId) -> Result<Option<Equation>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Equation>> {
        Ok(self.inner.read().await.rows.values().rev().cloned().collect())
    }

    async fn update(&self, id: EquationId, equation: &Equation) -> Result<Option<Equation>> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.get_mut(&id) else {
            return Ok(None);
        };
        row.set_coefficients(equation.coefficients());
        row.mark_saved(id, Utc::now());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: EquationId) -> Result<Option<Equation>> {
        Ok(self.inner.write().await.rows.remove(&id))
    }

    async fn stats(&self) -> Result<EquationStats> {
        let inner = self.inner.read().await;
        let mut by_solution_type: BTreeMap<String, u64> = BTreeMap::new();
        for equation in inner.rows.values() {
            *by_solution_type
                .entry(equation.solution_type().to_string())
                .or_default() += 1;
        }

        Ok(EquationStats {
            total_equations: inner.rows.len() as u64,
            by_solution_type,
            latest_equation: inner.rows.values().next_back().map(Equation::to_record),
        })
    }
}
