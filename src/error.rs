//! # Gate Error Types
//!
//! Structured error handling for the run-serialization gate using thiserror.
//! Every failure surfaces as a single human-readable message; query failures
//! are fatal and never retried (only the completion re-check loops).

use thiserror::Error;

/// Errors that can abort a gate invocation
#[derive(Debug, Error)]
pub enum GateError {
    /// Invalid or missing invocation input (interval, run id, payload path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Non-2xx response from the GitHub API
    #[error("GitHub API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text, surfaced verbatim
        message: String,
    },

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload or response deserialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Trigger payload file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GateError {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

pub type Result<T> = std::result::Result<T, GateError>;
