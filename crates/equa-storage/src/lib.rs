//! # equa-storage
//!
//! Storage backends for Equa equations.
//!
//! This crate provides:
//! - The [`EquationStore`] abstraction used by the HTTP layer
//! - A SQLite backend built on `sqlx` ([`SqliteStore`])
//! - An in-memory backend for tests and throwaway servers ([`MemoryStore`])
//! - [`DatabaseConfig`], handed to [`connect`] at startup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod memory;
pub mod sqlite;
pub mod traits;

use std::sync::Arc;

pub use config::DatabaseConfig;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{EquationStats, EquationStore};

/// Opens the backend selected by the URL scheme of `config.url`.
///
/// `sqlite:` URLs open a [`SqliteStore`]; `memory:` URLs create an empty
/// [`MemoryStore`].
pub async fn connect(config: &DatabaseConfig) -> Result<Arc<dyn EquationStore>> {
    config.validate()?;

    if config.url.starts_with("sqlite:") {
        let store = SqliteStore::connect(config).await?;
        Ok(Arc::new(store))
    } else if config.url.starts_with("memory:") {
        Ok(Arc::new(MemoryStore::new()))
    } else {
        Err(Error::UnsupportedUrl(config.redacted_url()))
    }
}
