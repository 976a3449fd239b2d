//! Error types for equa-storage

use thiserror::Error;

/// Result type alias for equa-storage operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in equa-storage
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from equa-core
    #[error("Core error: {0}")]
    Core(#[from] equa_core::Error),

    /// Error reported by the database driver
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The database URL names a backend this build does not provide
    #[error("Unsupported database URL: {0}")]
    UnsupportedUrl(String),
}

impl Error {
    /// Returns whether a retry of the same operation might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)) => true,
            Error::Database(_) => false,
            Error::Core(_) => false,
            Error::UnsupportedUrl(_) => false,
        }
    }
}
