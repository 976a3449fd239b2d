//! Error types for equa-core.

/// Errors that can occur while building or validating equations.
///
/// The solver itself is total and never produces one of these; they come
/// from input validation and identifier parsing.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// One or more required coefficient fields are absent
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Input validation error
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if any
        field: Option<String>,
        /// What went wrong
        message: String,
    },

    /// Equation not found
    #[error("Equation not found: {id}")]
    NotFound {
        /// Identifier that was looked up
        id: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the configuration
        message: String,
    },
}

/// Convenience `Result` type alias for Equa core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether the error was caused by caller-supplied input.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::MissingFields(_) => true,
            Error::Validation { .. } => true,
            Error::NotFound { .. } => true,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a new validation error with a field name.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
