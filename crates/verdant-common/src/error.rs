//! Error types shared across Verdant crates

use thiserror::Error;

/// Result type alias for Verdant operations
pub type Result<T> = std::result::Result<T, VerdantError>;

/// Workspace-level error type
///
/// Used outside the HTTP layer, where errors have not yet been narrowed to a
/// per-operation enum.
#[derive(Error, Debug)]
pub enum VerdantError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl VerdantError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }
}
