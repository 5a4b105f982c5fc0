//! Scanning text for tokens an allow-list does not cover.
//!
//! # Examples
//!
//! ```
//! use docspell::allowlist::AllowList;
//! use docspell::analysis::scan::scan_text;
//! use docspell::analysis::tokenizer::RegexTokenizer;
//!
//! let allowlist = AllowList::builtin();
//! let tokenizer = RegexTokenizer::new().unwrap();
//!
//! let unknown = scan_text(&allowlist, &tokenizer, "Run gradlew to build the apk").unwrap();
//! let words: Vec<_> = unknown.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(words, vec!["to", "build", "the", "apk"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::allowlist::AllowList;
use crate::analysis::token::Token;
use crate::analysis::token_filter::{AllowListFilter, Filter};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A token not covered by the allow-list, located in its source text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub word: String,
    /// 1-based line number
    pub line: usize,
    /// 1-based column, counted in characters
    pub column: usize,
    /// Byte offset in the source text
    pub offset: usize,
}

/// Tokenize `text` and return the tokens the allow-list does not exempt.
pub fn scan_text(
    allowlist: &AllowList,
    tokenizer: &dyn Tokenizer,
    text: &str,
) -> Result<Vec<Token>> {
    let filter = AllowListFilter::new(allowlist.clone());
    let tokens = filter.filter(tokenizer.tokenize(text)?)?;
    Ok(tokens.collect())
}

/// Scan `text` and locate every token not covered by the allow-list.
pub fn find_unknown_words(
    allowlist: &AllowList,
    tokenizer: &dyn Tokenizer,
    text: &str,
) -> Result<Vec<Finding>> {
    let lines = LineIndex::new(text);
    let findings = scan_text(allowlist, tokenizer, text)?
        .into_iter()
        .map(|token| {
            let (line, column) = lines.line_column(token.start_offset);
            Finding {
                word: token.text,
                line,
                column,
                offset: token.start_offset,
            }
        })
        .collect();

    Ok(findings)
}

/// Byte offsets of line starts, for repeated offset lookups in one text.
#[derive(Clone, Debug)]
pub struct LineIndex<'a> {
    text: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    /// Index the line starts of `text`.
    pub fn new(text: &'a str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        LineIndex { text, line_starts }
    }

    /// Number of lines, counting the empty line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a 1-based `(line, column)` pair.
    ///
    /// Offsets past the end of the text clamp to the end; offsets inside a
    /// multi-byte character resolve to that character.
    pub fn line_column(&self, offset: usize) -> (usize, usize) {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset);
        let line_start = self.line_starts[line - 1];
        let column = self.text[line_start..offset].chars().count() + 1;

        (line, column)
    }
}

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Indexes the whole text on every call; use [`LineIndex`] for many lookups.
pub fn line_column(text: &str, offset: usize) -> (usize, usize) {
    LineIndex::new(text).line_column(offset)
}
