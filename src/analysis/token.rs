//! Token types for text analysis.
//!
//! A [`Token`] is a slice of the scanned text plus its position and byte
//! offsets, so a spell-checker can report exactly where an unknown word sits.
//!
//! # Examples
//!
//! ```
//! use docspell::analysis::token::Token;
//!
//! let token = Token::with_offsets("gradle", 1, 4, 10);
//! assert_eq!(token.text, "gradle");
//! assert_eq!(token.len(), 6);
//! assert!(!token.is_allowed());
//! ```

use serde::{Deserialize, Serialize};

/// A single token produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Whether an allow-list has exempted this token
    pub allowed: bool,
}

impl Token {
    /// Create a new token with offsets derived from the text length.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        let text = text.into();
        let end_offset = text.len();
        Token {
            text,
            position,
            start_offset: 0,
            end_offset,
            allowed: false,
        }
    }

    /// Create a new token with explicit byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            allowed: false,
        }
    }

    /// Mark this token as allowed.
    pub fn allow(mut self) -> Self {
        self.allowed = true;
        self
    }

    /// Check if this token has been marked as allowed.
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A stream of tokens.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
