//! Error types for DevAI core operations.

use thiserror::Error;

/// The main error type for DevAI core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided input was invalid.
    #[error("invalid input: {field} - {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: &'static str,
        /// A description of why the input was invalid.
        message: String,
    },

    /// The platform configuration directory could not be determined.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A serialization error occurred.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A specialized Result type for DevAI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new invalid input error.
    #[must_use]
    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }
}
