//! # API Errors
//!
//! Error types for API operations.

use thiserror::Error;

/// Message shown when the backend gives no usable error text.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed. Please try again.";

/// Errors that can occur during API operations.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Network or HTTP error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Backend returned an error response.
    #[error("server error: {status} - {}", .message.as_deref().unwrap_or("no message"))]
    Server {
        /// HTTP status code.
        status: u16,
        /// The `error` field of the response body, if present.
        message: Option<String>,
    },

    /// Response did not match the expected schema.
    #[error("invalid response format: {0}")]
    InvalidResponse(String),

    /// The submission was cancelled before the response arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    /// Returns the text shown to the user for this error.
    ///
    /// The backend's own `error` message is passed through verbatim;
    /// every other failure collapses to [`FALLBACK_ERROR_MESSAGE`].
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Server {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;
