//! API Errors
//!
//! Failures surfaced by the list fetch layer to the rendering layer.

use thiserror::Error;

/// Result alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors that can occur while loading a list or detail endpoint
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {message}")]
    Network {
        /// Underlying transport message
        message: String,
    },

    /// Server answered with a non-2xx status
    #[error("Server returned HTTP {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Body could not be decoded as the expected shape
    #[error("Failed to parse response: {message}")]
    Decode {
        /// Decoder message
        message: String,
    },

    /// Envelope carried `success: false`
    #[error("Request was not successful")]
    Unsuccessful,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}
