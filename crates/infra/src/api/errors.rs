//! Transport error classification
//!
//! Every variant ends up as the diagnostic body of a failed `Outcome`; none
//! of them ever leave the client as an `Err`.

use std::time::Duration;

use thiserror::Error;

/// Ways a single sync call can fail before a usable response exists.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to serialize request: {0}")]
    Serialization(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// The status arrived but the body could not be read.
    #[error("Error reading response: {0}")]
    Body(String),
}

impl ApiError {
    /// Classify a reqwest failure for a call bounded by `timeout`.
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_builder() {
            Self::InvalidUrl(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }

    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
