//! # docspell
//!
//! Spelling allow-list for documentation sites.
//!
//! ## Features
//!
//! - Literal words and regular-expression patterns in one validated list
//! - Malformed patterns are rejected when the list is built
//! - Built-in list for the documentation site's technical vocabulary
//! - JSON and plain-text list files
//! - Tokenizer and filter for scanning prose against the list

pub mod allowlist;
pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::allowlist::{
        AllowList, AllowListConfig, AllowListEntry, AllowListFile, EntryKind, EntrySpec,
    };
    pub use crate::error::{DocspellError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
