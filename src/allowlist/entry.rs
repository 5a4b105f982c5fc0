//! Allow-list entries.
//!
//! An entry is either a literal word or a regular-expression pattern. Entries
//! exist in two forms:
//!
//! - [`EntrySpec`] - the uncompiled, serializable description of an entry
//! - [`AllowListEntry`] - the compiled form held by an
//!   [`AllowList`](crate::allowlist::AllowList)
//!
//! # Examples
//!
//! ```
//! use docspell::allowlist::{AllowListEntry, EntryKind, EntrySpec};
//!
//! let spec = EntrySpec::infer("/^package:.*/");
//! assert_eq!(spec.kind(), EntryKind::Pattern);
//!
//! let entry = AllowListEntry::compile(0, &spec).unwrap();
//! assert!(entry.matches("package:melos"));
//! ```

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{DocspellError, Result};

/// Discriminates literal entries from pattern entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Exact word match
    Literal,
    /// Regular-expression match
    Pattern,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::Literal => write!(f, "literal"),
            EntryKind::Pattern => write!(f, "pattern"),
        }
    }
}

/// Uncompiled description of an allow-list entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntrySpec {
    /// An exact word.
    Literal {
        /// The word itself
        value: String,
    },
    /// A regular expression.
    Pattern {
        /// Regex source, without delimiters
        source: String,
        /// Optional note describing what the pattern is meant to cover
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl EntrySpec {
    /// Create a literal entry.
    pub fn literal<S: Into<String>>(value: S) -> Self {
        EntrySpec::Literal {
            value: value.into(),
        }
    }

    /// Create a pattern entry.
    pub fn pattern<S: Into<String>>(source: S) -> Self {
        EntrySpec::Pattern {
            source: source.into(),
            description: None,
        }
    }

    /// Create a pattern entry with a description.
    pub fn described_pattern<S, D>(source: S, description: D) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        EntrySpec::Pattern {
            source: source.into(),
            description: Some(description.into()),
        }
    }

    /// Infer the entry kind from a raw, untyped string.
    ///
    /// A string wrapped in slashes (`/^[A-Z].*/`) is a pattern with the
    /// slashes stripped. A string that starts with `^` or ends with an
    /// unescaped `$` is a pattern as written. Anything else is a literal,
    /// including a lone `^` or `$`.
    pub fn infer(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with('/') && raw.ends_with('/') {
            return EntrySpec::pattern(&raw[1..raw.len() - 1]);
        }

        if raw.len() > 1
            && (raw.starts_with('^') || (raw.ends_with('$') && !raw.ends_with("\\$")))
        {
            return EntrySpec::pattern(raw);
        }

        EntrySpec::literal(raw)
    }

    /// Get the kind of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            EntrySpec::Literal { .. } => EntryKind::Literal,
            EntrySpec::Pattern { .. } => EntryKind::Pattern,
        }
    }

    /// Get the raw word or pattern source.
    pub fn raw(&self) -> &str {
        match self {
            EntrySpec::Literal { value } => value,
            EntrySpec::Pattern { source, .. } => source,
        }
    }
}

/// A compiled pattern entry.
#[derive(Clone, Debug)]
pub struct PatternEntry {
    regex: Arc<Regex>,
    description: Option<String>,
}

impl PatternEntry {
    /// Compile a pattern, reporting failures against `index`.
    ///
    /// A pattern that matches the empty string is rejected: searched
    /// unanchored, it would match every token (`$`, `x*`).
    pub fn compile(index: usize, source: &str, description: Option<String>) -> Result<Self> {
        let regex = Regex::new(source)
            .map_err(|e| DocspellError::malformed_pattern(index, source, e))?;

        if regex.is_match("") {
            return Err(DocspellError::malformed_pattern(
                index,
                source,
                "pattern matches the empty string and would allow every token",
            ));
        }

        Ok(PatternEntry {
            regex: Arc::new(regex),
            description,
        })
    }

    /// Get the pattern source.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Get the pattern description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Check whether the pattern matches anywhere in `token`.
    pub fn is_match(&self, token: &str) -> bool {
        self.regex.is_match(token)
    }
}

/// A compiled allow-list entry.
#[derive(Clone, Debug)]
pub enum AllowListEntry {
    /// An exact word
    Literal(String),
    /// A compiled regular expression
    Pattern(PatternEntry),
}

impl AllowListEntry {
    /// Compile an entry spec. `index` is used only for error reporting.
    pub fn compile(index: usize, spec: &EntrySpec) -> Result<Self> {
        match spec {
            EntrySpec::Literal { value } => Ok(AllowListEntry::Literal(value.clone())),
            EntrySpec::Pattern {
                source,
                description,
            } => Ok(AllowListEntry::Pattern(PatternEntry::compile(
                index,
                source,
                description.clone(),
            )?)),
        }
    }

    /// Get the kind of this entry.
    pub fn kind(&self) -> EntryKind {
        match self {
            AllowListEntry::Literal(_) => EntryKind::Literal,
            AllowListEntry::Pattern(_) => EntryKind::Pattern,
        }
    }

    /// Get the raw word or pattern source.
    pub fn raw(&self) -> &str {
        match self {
            AllowListEntry::Literal(word) => word,
            AllowListEntry::Pattern(pattern) => pattern.source(),
        }
    }

    /// Check this single entry against a token, case-sensitively.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            AllowListEntry::Literal(word) => word == token,
            AllowListEntry::Pattern(pattern) => pattern.is_match(token),
        }
    }

    /// Convert back to an uncompiled spec.
    pub fn to_spec(&self) -> EntrySpec {
        match self {
            AllowListEntry::Literal(word) => EntrySpec::literal(word.clone()),
            AllowListEntry::Pattern(pattern) => EntrySpec::Pattern {
                source: pattern.source().to_string(),
                description: pattern.description.clone(),
            },
        }
    }
}

impl fmt::Display for AllowListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllowListEntry::Literal(word) => write!(f, "{word}"),
            AllowListEntry::Pattern(pattern) => write!(f, "/{}/", pattern.source()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_slash_delimited_pattern() {
        let spec = EntrySpec::infer("/^[A-Z].*/");
        assert_eq!(spec, EntrySpec::pattern("^[A-Z].*"));
    }

    #[test]
    fn test_infer_anchored_pattern() {
        assert_eq!(EntrySpec::infer("^package:.*").kind(), EntryKind::Pattern);
        assert_eq!(EntrySpec::infer("v[0-9]+$").kind(), EntryKind::Pattern);
    }

    #[test]
    fn test_infer_literal() {
        assert_eq!(EntrySpec::infer("gradle"), EntrySpec::literal("gradle"));
        assert_eq!(EntrySpec::infer(".dex").kind(), EntryKind::Literal);
        assert_eq!(EntrySpec::infer("&raquo").kind(), EntryKind::Literal);
        assert_eq!(EntrySpec::infer("/").kind(), EntryKind::Literal);
        assert_eq!(EntrySpec::infer("US\\$").kind(), EntryKind::Literal);
    }

    #[test]
    fn test_compile_pattern() {
        let entry = AllowListEntry::compile(0, &EntrySpec::pattern("^[A-Z].*")).unwrap();
        assert_eq!(entry.kind(), EntryKind::Pattern);
        assert!(entry.matches("FooBar"));
        assert!(!entry.matches("fooBar"));
        assert_eq!(entry.to_string(), "/^[A-Z].*/");
    }

    #[test]
    fn test_compile_malformed_pattern() {
        let err = AllowListEntry::compile(7, &EntrySpec::pattern("[a-")).unwrap_err();
        match err {
            DocspellError::MalformedPattern { index, pattern, .. } => {
                assert_eq!(index, 7);
                assert_eq!(pattern, "[a-");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_infer_lone_anchor_is_literal() {
        assert_eq!(EntrySpec::infer("$"), EntrySpec::literal("$"));
        assert_eq!(EntrySpec::infer("^"), EntrySpec::literal("^"));
    }

    #[test]
    fn test_reject_pattern_matching_everything() {
        for source in ["$", "^", ".*", "x*", "(?:)"] {
            let err = PatternEntry::compile(4, source, None).unwrap_err();
            match err {
                DocspellError::MalformedPattern { index, pattern, reason } => {
                    assert_eq!(index, 4);
                    assert_eq!(pattern, source);
                    assert!(reason.contains("empty string"));
                }
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_literal_is_exact() {
        let entry = AllowListEntry::compile(0, &EntrySpec::literal("gradle")).unwrap();
        assert!(entry.matches("gradle"));
        assert!(!entry.matches("Gradle"));
        assert!(!entry.matches("gradlew"));
    }

    #[test]
    fn test_spec_serde_shape() {
        let spec = EntrySpec::described_pattern("^package:.*", "e.g. package:melos");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["type"], "pattern");
        assert_eq!(json["source"], "^package:.*");

        let back: EntrySpec = serde_json::from_value(json).unwrap();
        assert_eq!(back, spec);
    }
}
