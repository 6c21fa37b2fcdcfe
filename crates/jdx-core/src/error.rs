//! Error types for the jdx-core library.
//!
//! Extraction itself never fails: every extractor maps unusable input to its
//! "no match" value. These errors cover configuration and I/O only.

use thiserror::Error;

/// Main error type for the jdx library.
#[derive(Error, Debug)]
pub enum JdxError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the jdx library.
pub type Result<T> = std::result::Result<T, JdxError>;
