//! Serialized allow-list configuration.
//!
//! Two on-disk formats are supported:
//!
//! - JSON, in the shape `{ "patterns": [...], "words": [...] }` with optional
//!   matching options
//! - plain text, one entry per line, `#` comment lines, with the entry kind
//!   inferred by [`EntrySpec::infer`] and entries kept in file order
//!
//! [`AllowListFile::load`] picks the format by file extension.
//!
//! # Examples
//!
//! ```
//! use docspell::allowlist::AllowListConfig;
//!
//! let config = AllowListConfig::from_json_str(
//!     r#"{ "patterns": ["^package:.*"], "words": ["gradle"] }"#,
//! ).unwrap();
//!
//! let allowlist = config.build().unwrap();
//! assert!(allowlist.is_allowed("package:melos"));
//! assert!(allowlist.is_allowed("gradle"));
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::allowlist::builtin::BuiltinAllowList;
use crate::allowlist::entry::{AllowListEntry, EntrySpec};
use crate::allowlist::provider::{AllowList, MatchOptions};
use crate::error::Result;

/// A pattern as it appears in a configuration file.
///
/// Either a bare regex source or an object carrying a description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSource {
    /// Bare regex source
    Plain(String),
    /// Regex source with a description
    Described {
        source: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl PatternSource {
    /// Get the regex source.
    pub fn source(&self) -> &str {
        match self {
            PatternSource::Plain(source) => source,
            PatternSource::Described { source, .. } => source,
        }
    }

    fn to_spec(&self) -> EntrySpec {
        match self {
            PatternSource::Plain(source) => EntrySpec::pattern(source.clone()),
            PatternSource::Described {
                source,
                description,
            } => EntrySpec::Pattern {
                source: source.clone(),
                description: description.clone(),
            },
        }
    }
}

/// Configuration for an allow-list.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowListConfig {
    /// Regular-expression entries
    #[serde(default)]
    pub patterns: Vec<PatternSource>,

    /// Literal word entries
    #[serde(default)]
    pub words: Vec<String>,

    /// Compare literals case-insensitively
    #[serde(default, skip_serializing_if = "is_false")]
    pub ignore_literal_case: bool,

    /// Prepend the built-in entries to this configuration's entries
    #[serde(default, skip_serializing_if = "is_false")]
    pub extends_builtin: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl AllowListConfig {
    /// Configuration describing the built-in list.
    pub fn builtin() -> Self {
        Self::from_specs(BuiltinAllowList::entries())
    }

    /// Group specs into patterns and words, keeping relative order within each.
    pub fn from_specs<I>(specs: I) -> Self
    where
        I: IntoIterator<Item = EntrySpec>,
    {
        let mut config = AllowListConfig::default();
        for spec in specs {
            match spec {
                EntrySpec::Literal { value } => config.words.push(value),
                EntrySpec::Pattern {
                    source,
                    description: None,
                } => config.patterns.push(PatternSource::Plain(source)),
                EntrySpec::Pattern {
                    source,
                    description,
                } => config.patterns.push(PatternSource::Described {
                    source,
                    description,
                }),
            }
        }
        config
    }

    /// Describe an existing allow-list.
    pub fn from_allowlist(allowlist: &AllowList) -> Self {
        let mut config =
            Self::from_specs(allowlist.entries().iter().map(AllowListEntry::to_spec));
        config.ignore_literal_case = allowlist.options().ignore_literal_case;
        config
    }

    /// Parse a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        info!(
            "Loaded {} patterns and {} words from {}",
            config.patterns.len(),
            config.words.len(),
            path.display()
        );
        Ok(config)
    }

    /// Serialize to a JSON string.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Write this configuration as JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let mut json = self.to_json_string(pretty)?;
        json.push('\n');
        fs::write(path, json)?;
        Ok(())
    }

    /// Matching options described by this configuration.
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions {
            ignore_literal_case: self.ignore_literal_case,
        }
    }

    /// Entry specs in build order: built-in entries (if extended), then
    /// patterns, then words.
    ///
    /// Entry indices reported by [`build`](Self::build) refer to this order.
    pub fn to_specs(&self) -> Vec<EntrySpec> {
        let builtin = if self.extends_builtin {
            BuiltinAllowList::entries()
        } else {
            Vec::new()
        };

        builtin
            .into_iter()
            .chain(self.patterns.iter().map(PatternSource::to_spec))
            .chain(self.words.iter().map(|word| EntrySpec::literal(word.clone())))
            .collect()
    }

    /// Validate and compile into an allow-list.
    pub fn build(&self) -> Result<AllowList> {
        AllowList::with_options(self.to_specs(), self.match_options())
    }
}

/// An allow-list file as read from disk.
///
/// JSON files keep their structured configuration. Plain-text files keep
/// their entries in file order, so a malformed pattern is reported at its
/// position among the file's entries (comment and blank lines excluded).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllowListFile {
    /// A JSON configuration
    Json(AllowListConfig),
    /// A plain-text list, kinds inferred
    Text(Vec<EntrySpec>),
}

impl AllowListFile {
    /// Parse the plain-text format.
    pub fn from_text(text: &str) -> Self {
        let specs = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(EntrySpec::infer)
            .collect();
        AllowListFile::Text(specs)
    }

    /// Load a plain-text list file.
    pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let file = Self::from_text(&content);
        info!("Loaded {} entries from {}", file.len(), path.display());
        Ok(file)
    }

    /// Load a JSON configuration file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        AllowListConfig::load_json(path).map(AllowListFile::Json)
    }

    /// Load a file, choosing the format by extension: `.json` is JSON, anything
    /// else is plain text.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::load_json(path)
        } else {
            Self::load_text(path)
        }
    }

    /// Entry specs in build order.
    pub fn to_specs(&self) -> Vec<EntrySpec> {
        match self {
            AllowListFile::Json(config) => config.to_specs(),
            AllowListFile::Text(specs) => specs.clone(),
        }
    }

    /// Number of entries before de-duplication, built-in entries included.
    pub fn len(&self) -> usize {
        match self {
            AllowListFile::Json(config) => config.to_specs().len(),
            AllowListFile::Text(specs) => specs.len(),
        }
    }

    /// Check if the file declares no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Matching options described by the file. Text lists use the defaults.
    pub fn match_options(&self) -> MatchOptions {
        match self {
            AllowListFile::Json(config) => config.match_options(),
            AllowListFile::Text(_) => MatchOptions::default(),
        }
    }

    /// Validate and compile into an allow-list.
    pub fn build(&self) -> Result<AllowList> {
        match self {
            AllowListFile::Json(config) => config.build(),
            AllowListFile::Text(specs) => {
                AllowList::with_options(specs.iter().cloned(), self.match_options())
            }
        }
    }
}
