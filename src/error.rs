//! Error handling for rewind-rs
//!
//! The core store has no fallible operations: absence and "unchanged" are
//! expressed as `None`, never as errors. The error type here belongs to the
//! configuration layer: loading, parsing, and saving channel lists.

use thiserror::Error;

/// Main error type for rewind-rs operations
#[derive(Error, Debug)]
pub enum RewindError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors parsing configuration content
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for rewind-rs operations
pub type Result<T> = std::result::Result<T, RewindError>;
