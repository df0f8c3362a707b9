//! Error types for FileKV
//!
//! Provides a unified error type for all store operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for FileKV operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // Startup Errors
    // -------------------------------------------------------------------------
    #[error("Could not initialize store at '{}': {}", .path.display(), .reason)]
    Initialization { path: PathBuf, reason: String },

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    #[error("Deserialization error in {collection}/{key}: {source}")]
    Deserialization {
        collection: String,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    // -------------------------------------------------------------------------
    // Lookup Errors
    // -------------------------------------------------------------------------
    #[error("Record not found: {collection}/{key}")]
    NotFound { collection: String, key: String },

    #[error("Invalid name: {0}")]
    InvalidName(String),
}

impl KvError {
    /// True if the error reports a missing record
    pub fn is_not_found(&self) -> bool {
        matches!(self, KvError::NotFound { .. })
    }
}
