//! Shared handler state.

use equa_storage::{DatabaseConfig, EquationStore};
use std::sync::Arc;

/// State cloned into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend.
    pub store: Arc<dyn EquationStore>,
    /// Database settings the store was opened with; reported by `/test-db`.
    pub database: Arc<DatabaseConfig>,
}

impl AppState {
    /// Creates handler state around an opened store.
    pub fn new(store: Arc<dyn EquationStore>, database: DatabaseConfig) -> Self {
        Self {
            store,
            database: Arc::new(database),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.store.backend())
            .field("database_url", &self.database.redacted_url())
            .finish()
    }
}
