//! Allow-list filter implementation.
//!
//! This module provides a filter that drops tokens exempted by an
//! [`AllowList`], leaving only the words a spell-checker still has to look at.
//!
//! # Examples
//!
//! ```
//! use docspell::allowlist::AllowList;
//! use docspell::analysis::token::Token;
//! use docspell::analysis::token_filter::{AllowListFilter, Filter};
//!
//! let filter = AllowListFilter::new(AllowList::builtin());
//! let tokens = vec![
//!     Token::new("configure", 0),
//!     Token::new("gradle", 1),
//!     Token::new("FlutterFire", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "configure");
//! ```

use crate::allowlist::AllowList;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes (or marks) tokens covered by an allow-list.
#[derive(Clone, Debug)]
pub struct AllowListFilter {
    allowlist: AllowList,
    /// Whether to remove allowed tokens entirely or just mark them as allowed
    remove_allowed: bool,
}

impl AllowListFilter {
    /// Create a filter that removes allowed tokens.
    pub fn new(allowlist: AllowList) -> Self {
        AllowListFilter {
            allowlist,
            remove_allowed: true,
        }
    }

    /// Set whether to remove allowed tokens or keep them marked as allowed.
    pub fn remove_allowed(mut self, remove: bool) -> Self {
        self.remove_allowed = remove;
        self
    }

    /// Get the allow-list backing this filter.
    pub fn allowlist(&self) -> &AllowList {
        &self.allowlist
    }
}

impl Filter for AllowListFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter_map(|token| {
                if token.is_allowed() {
                    Some(token)
                } else if self.allowlist.is_allowed(&token.text) {
                    if self.remove_allowed {
                        None
                    } else {
                        Some(token.allow())
                    }
                } else {
                    Some(token)
                }
            })
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "allowlist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowlist::EntrySpec;

    fn allowlist() -> AllowList {
        AllowList::new(vec![
            EntrySpec::literal("gradle"),
            EntrySpec::pattern("^package:"),
        ])
        .unwrap()
    }

    #[test]
    fn test_allowlist_filter() {
        let filter = AllowListFilter::new(allowlist());
        let tokens = vec![
            Token::new("run", 0),
            Token::new("gradle", 1),
            Token::new("with", 2),
            Token::new("package:melos", 3),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "run");
        assert_eq!(result[1].text, "with");
    }

    #[test]
    fn test_allowlist_filter_marks_tokens() {
        let filter = AllowListFilter::new(allowlist()).remove_allowed(false);
        let tokens = vec![Token::new("run", 0), Token::new("gradle", 1)];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert!(!result[0].is_allowed());
        assert!(result[1].is_allowed());
    }

    #[test]
    fn test_already_allowed_tokens_pass_through() {
        let filter = AllowListFilter::new(allowlist());
        let tokens = vec![Token::new("anything", 0).allow()];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert!(result[0].is_allowed());
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(AllowListFilter::new(AllowList::empty()).name(), "allowlist");
    }
}
