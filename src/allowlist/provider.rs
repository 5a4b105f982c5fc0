//! The immutable allow-list provider.

use std::sync::Arc;

use ahash::AHashSet;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::allowlist::builtin::BuiltinAllowList;
use crate::allowlist::entry::{AllowListEntry, EntrySpec, PatternEntry};
use crate::error::Result;

/// Options controlling how tokens are matched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Compare literals after lowercasing both sides. Patterns are always
    /// evaluated as written.
    #[serde(default)]
    pub ignore_literal_case: bool,
}

impl MatchOptions {
    /// Options with literal case folding enabled.
    pub fn ignore_literal_case() -> Self {
        MatchOptions {
            ignore_literal_case: true,
        }
    }
}

/// A validated, read-only allow-list.
///
/// Every pattern is compiled when the list is built, so a malformed entry
/// fails construction instead of the first lookup. The list is cheap to
/// clone and can be shared between threads.
///
/// # Examples
///
/// ```
/// use docspell::allowlist::AllowList;
///
/// let allowlist = AllowList::builtin();
/// assert!(allowlist.is_allowed("gradle"));
/// assert!(allowlist.is_allowed("FooBar"));
/// assert!(!allowlist.is_allowed("randomlowercaseword"));
/// ```
#[derive(Clone, Debug)]
pub struct AllowList {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// All entries in insertion order
    entries: Vec<AllowListEntry>,
    /// Literal words, folded when `ignore_literal_case` is set
    literals: AHashSet<String>,
    /// Indices into `entries` for pattern entries, in order
    pattern_indices: Vec<usize>,
    options: MatchOptions,
}

impl AllowList {
    /// Build an allow-list with default (case-sensitive) matching.
    pub fn new<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = EntrySpec>,
    {
        Self::with_options(specs, MatchOptions::default())
    }

    /// Build an allow-list with the given matching options.
    ///
    /// Fails with [`MalformedPattern`](crate::error::DocspellError::MalformedPattern)
    /// on the first pattern that does not compile. Duplicate literals keep
    /// their first occurrence and empty literals are dropped.
    pub fn with_options<I>(specs: I, options: MatchOptions) -> Result<Self>
    where
        I: IntoIterator<Item = EntrySpec>,
    {
        let mut entries = Vec::new();
        let mut literals = AHashSet::new();
        let mut pattern_indices = Vec::new();

        for (index, spec) in specs.into_iter().enumerate() {
            match spec {
                EntrySpec::Literal { value } => {
                    if value.is_empty() {
                        warn!("Dropping empty literal at entry {index}");
                        continue;
                    }
                    let key = fold(&value, options);
                    if !literals.insert(key) {
                        debug!("Dropping duplicate literal {value:?} at entry {index}");
                        continue;
                    }
                    entries.push(AllowListEntry::Literal(value));
                }
                EntrySpec::Pattern {
                    source,
                    description,
                } => {
                    let pattern = PatternEntry::compile(index, &source, description)?;
                    pattern_indices.push(entries.len());
                    entries.push(AllowListEntry::Pattern(pattern));
                }
            }
        }

        debug!(
            "Built allow-list with {} literals and {} patterns",
            literals.len(),
            pattern_indices.len()
        );

        Ok(AllowList {
            inner: Arc::new(Inner {
                entries,
                literals,
                pattern_indices,
                options,
            }),
        })
    }

    /// An allow-list with no entries. Nothing is allowed.
    pub fn empty() -> Self {
        AllowList {
            inner: Arc::new(Inner {
                entries: Vec::new(),
                literals: AHashSet::new(),
                pattern_indices: Vec::new(),
                options: MatchOptions::default(),
            }),
        }
    }

    /// The documentation site's built-in allow-list.
    pub fn builtin() -> Self {
        BuiltinAllowList::allowlist()
    }

    /// Get all entries in insertion order.
    pub fn entries(&self) -> &[AllowListEntry] {
        &self.inner.entries
    }

    /// Get the matching options this list was built with.
    pub fn options(&self) -> MatchOptions {
        self.inner.options
    }

    /// Iterate over literal words.
    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.inner.entries.iter().filter_map(|entry| match entry {
            AllowListEntry::Literal(word) => Some(word.as_str()),
            AllowListEntry::Pattern(_) => None,
        })
    }

    /// Iterate over compiled patterns.
    pub fn patterns(&self) -> impl Iterator<Item = &PatternEntry> {
        self.inner
            .pattern_indices
            .iter()
            .filter_map(move |&i| match &self.inner.entries[i] {
                AllowListEntry::Pattern(pattern) => Some(pattern),
                AllowListEntry::Literal(_) => None,
            })
    }

    /// Number of entries after de-duplication.
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    /// Check if the list has no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }

    /// Check whether a token is exempt from spell checking.
    ///
    /// Returns `true` if the token equals a literal entry or any pattern
    /// matches it. An empty token is never allowed.
    pub fn is_allowed(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }

        if self.inner.literals.contains(fold(token, self.inner.options).as_str()) {
            return true;
        }

        self.patterns().any(|pattern| pattern.is_match(token))
    }

    /// Find the entry that allows a token, if any.
    ///
    /// Literals win over patterns; among patterns the first in list order wins.
    pub fn find_match(&self, token: &str) -> Option<&AllowListEntry> {
        if token.is_empty() {
            return None;
        }

        let key = fold(token, self.inner.options);
        if self.inner.literals.contains(key.as_str()) {
            return self.inner.entries.iter().find(|entry| match entry {
                AllowListEntry::Literal(word) => fold(word, self.inner.options) == key,
                AllowListEntry::Pattern(_) => false,
            });
        }

        self.inner
            .pattern_indices
            .iter()
            .map(|&i| &self.inner.entries[i])
            .find(|entry| entry.matches(token))
    }

    /// Check whether two handles share the same compiled list.
    pub fn ptr_eq(&self, other: &AllowList) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Convert the list back to uncompiled specs, in order.
    pub fn to_specs(&self) -> Vec<EntrySpec> {
        self.inner.entries.iter().map(AllowListEntry::to_spec).collect()
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::builtin()
    }
}

fn fold(word: &str, options: MatchOptions) -> String {
    if options.ignore_literal_case {
        word.to_lowercase()
    } else {
        word.to_string()
    }
}
