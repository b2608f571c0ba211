//! Error types for keyword extraction.
//!
//! The extraction pipeline itself never fails. These errors cover the
//! surfaces around it: loading configuration, resolving stop-word lists and
//! reading input for the command-line tool.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for keyfreq operations.
#[derive(Error, Debug)]
pub enum KeyfreqError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// No stop-word list is known for the requested language.
    #[error("Unknown stop-word language: {0}")]
    UnknownLanguage(String),

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),
}

/// Result type alias for keyfreq operations.
pub type Result<T> = std::result::Result<T, KeyfreqError>;

impl From<serde_json::Error> for KeyfreqError {
    fn from(err: serde_json::Error) -> Self {
        KeyfreqError::Serialization(err.to_string())
    }
}
