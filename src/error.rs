//! Error types for the concordance library.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`ConcordanceError`].
//!
//! # Examples
//!
//! ```
//! use concordance::error::{ConcordanceError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ConcordanceError::invalid_argument("empty query"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for concordance operations.
#[derive(Error, Debug)]
pub enum ConcordanceError {
    /// Not enough texts were supplied to a batch operation.
    #[error("Insufficient input: need at least {needed} texts, got {got}")]
    InsufficientInput { needed: usize, got: usize },

    /// The four token views of a record split into different lengths.
    #[error(
        "Misaligned record {url}: text={text} shapes={shapes} tags={tags} lemmas={lemmas} tokens"
    )]
    MisalignedRecord {
        url: String,
        text: usize,
        shapes: usize,
        tags: usize,
        lemmas: usize,
    },

    /// An alignment table would exceed the configured size bound.
    #[error("Input too large: aligning {url} needs {cells} cells, limit is {limit}")]
    InputTooLarge {
        url: String,
        cells: usize,
        limit: usize,
    },

    /// A match could not be located in token space.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with ConcordanceError.
pub type Result<T> = std::result::Result<T, ConcordanceError>;

impl ConcordanceError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ConcordanceError::InvalidArgument(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ConcordanceError::Config(msg.into())
    }

    /// Create a new not-found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        ConcordanceError::NotFound(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = ConcordanceError::invalid_argument("empty query");
        assert_eq!(error.to_string(), "Invalid argument: empty query");

        let error = ConcordanceError::config("bad width");
        assert_eq!(error.to_string(), "Configuration error: bad width");

        let error = ConcordanceError::InsufficientInput { needed: 2, got: 1 };
        assert_eq!(
            error.to_string(),
            "Insufficient input: need at least 2 texts, got 1"
        );
    }

    #[test]
    fn test_misaligned_display() {
        let error = ConcordanceError::MisalignedRecord {
            url: "https://example.org/a".to_string(),
            text: 3,
            shapes: 3,
            tags: 2,
            lemmas: 3,
        };
        let msg = error.to_string();
        assert!(msg.contains("https://example.org/a"));
        assert!(msg.contains("tags=2"));
    }

    #[test]
    fn test_error_from_io() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = ConcordanceError::from(io_error);

        match error {
            ConcordanceError::Io(_) => {}
            _ => panic!("Expected IO error"),
        }
    }
}
