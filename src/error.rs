//! Error types for navtools
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in navtools
#[derive(Debug, Error)]
pub enum NavError {
    /// Transport-level failure talking to the registry
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Registry answered with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Invalid or unusable configuration
    #[error("Config error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for navtools operations
pub type Result<T> = std::result::Result<T, NavError>;
