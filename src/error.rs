//! Error types for the docspell library.
//!
//! All fallible operations return [`Result`], whose error side is
//! [`DocspellError`]. The only domain error is
//! [`DocspellError::MalformedPattern`], raised while an allow-list is being
//! built so that a broken list never reaches a live spell check.
//!
//! # Examples
//!
//! ```
//! use docspell::allowlist::{AllowList, EntrySpec};
//! use docspell::error::DocspellError;
//!
//! let result = AllowList::new(vec![
//!     EntrySpec::literal("gradle"),
//!     EntrySpec::pattern("^[unclosed"),
//! ]);
//!
//! match result {
//!     Err(DocspellError::MalformedPattern { index, .. }) => assert_eq!(index, 1),
//!     _ => panic!("expected a malformed pattern"),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for docspell operations.
#[derive(Error, Debug)]
pub enum DocspellError {
    /// A pattern entry is not a valid regular expression.
    #[error("Malformed pattern at entry {index} ({pattern:?}): {reason}")]
    MalformedPattern {
        /// Position of the entry in the list being loaded
        index: usize,
        /// The offending pattern source
        pattern: String,
        /// Message from the regex compiler
        reason: String,
    },

    /// I/O errors (reading or writing list files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with DocspellError.
pub type Result<T> = std::result::Result<T, DocspellError>;

impl DocspellError {
    /// Create a new malformed pattern error.
    pub fn malformed_pattern<P, R>(index: usize, pattern: P, reason: R) -> Self
    where
        P: Into<String>,
        R: ToString,
    {
        DocspellError::MalformedPattern {
            index,
            pattern: pattern.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        DocspellError::Analysis(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        DocspellError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DocspellError::Other(msg.into())
    }

    /// Whether this error reports a broken allow-list entry.
    pub fn is_malformed_pattern(&self) -> bool {
        matches!(self, DocspellError::MalformedPattern { .. })
    }
}
