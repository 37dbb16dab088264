//! API Errors
//!
//! The `Display` text of each variant is what the views show after "Error: ".

use thiserror::Error;

/// Shown when a failure carries no usable message
pub const GENERIC_MESSAGE: &str = "An error occurred";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure
    #[error("{0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("Failed to fetch {resource}")]
    Status { resource: &'static str, status: u16 },

    /// Body was not the expected JSON shape
    #[error("Invalid response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl ApiError {
    /// Network error from a message, substituting the generic text when blank
    pub fn network(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ApiError::Network(GENERIC_MESSAGE.to_string())
        } else {
            ApiError::Network(message)
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
