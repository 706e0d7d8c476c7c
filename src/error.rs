//! Error types for filekv
//!
//! Provides a unified error type for all operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using KvError
pub type Result<T> = std::result::Result<T, KvError>;

/// Unified error type for filekv operations
#[derive(Debug, Error)]
pub enum KvError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("cannot parse {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("key '{0}' not found")]
    KeyNotFound(String),

    // -------------------------------------------------------------------------
    // Persistence Errors
    // -------------------------------------------------------------------------
    #[error("corrupt store file {path}: {reason}")]
    CorruptStore { path: PathBuf, reason: String },

    #[error("persistence failed: {0}")]
    Persistence(String),
}

impl KvError {
    /// Build a parse error for an offending input line
    pub fn parse(input: &str, reason: impl Into<String>) -> Self {
        KvError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
