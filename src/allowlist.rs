//! Spelling allow-lists.
//!
//! An allow-list holds the tokens a documentation spell-checker must not flag:
//! literal words and regular-expression patterns for identifier conventions.
//! Lists are validated once at construction and are read-only afterwards.

pub mod builtin;
pub mod config;
pub mod entry;
pub mod provider;

pub use builtin::BuiltinAllowList;
pub use config::{AllowListConfig, AllowListFile, PatternSource};
pub use entry::{AllowListEntry, EntryKind, EntrySpec, PatternEntry};
pub use provider::{AllowList, MatchOptions};
