//! Error types for equa-api

use thiserror::Error;

/// Result type alias for equa-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in equa-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from equa-core
    #[error("Core error: {0}")]
    Core(#[from] equa_core::Error),

    /// Error from equa-storage
    #[error("Storage error: {0}")]
    Storage(#[from] equa_storage::Error),

    /// Socket or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed
    #[error("Invalid configuration file: {0}")]
    ConfigFile(#[from] toml::de::Error),
}
