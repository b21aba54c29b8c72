//! Error types for the spelling library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SpellError`] enum. An empty suggestion list is a successful outcome and
//! never surfaces here.
//!
//! # Examples
//!
//! ```
//! use sarissa_spell::error::{Result, SpellError};
//!
//! fn check_distance(max_distance: i64) -> Result<usize> {
//!     if max_distance < 0 {
//!         return Err(SpellError::invalid_argument("max_distance must not be negative"));
//!     }
//!     Ok(max_distance as usize)
//! }
//!
//! assert!(check_distance(-1).is_err());
//! assert_eq!(check_distance(2).unwrap(), 2);
//! ```

use std::io;

use thiserror::Error;

/// The main error type for spelling operations.
///
/// It uses the `thiserror` crate for the `Error` implementation and provides
/// constructor helpers for the string-carrying variants.
#[derive(Error, Debug)]
pub enum SpellError {
    /// I/O errors while reading corpora or dictionary files
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Precondition violations on caller input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration that cannot be honoured
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Analysis-related errors (tokenizer patterns)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Operation cancelled by the caller
    #[error("Operation cancelled: {0}")]
    Cancelled(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal failures such as thread pool construction
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with SpellError.
pub type Result<T> = std::result::Result<T, SpellError>;

impl SpellError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidArgument(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SpellError::InvalidConfig(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        SpellError::Analysis(msg.into())
    }

    /// Create a new cancelled error.
    pub fn cancelled<S: Into<String>>(msg: S) -> Self {
        SpellError::Cancelled(msg.into())
    }

    /// Create a new internal error.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        SpellError::Internal(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellError::Other(msg.into())
    }

    /// Whether this error reports a caller precondition violation.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SpellError::InvalidArgument(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SpellError::invalid_argument("empty input term");
        assert_eq!(error.to_string(), "Invalid argument: empty input term");
        assert!(error.is_invalid_argument());

        let error = SpellError::cancelled("scan aborted");
        assert_eq!(error.to_string(), "Operation cancelled: scan aborted");
        assert!(!error.is_invalid_argument());

        let error = SpellError::invalid_config("chunk_size must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: chunk_size must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let spell_error = SpellError::from(io_error);

        match spell_error {
            SpellError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
