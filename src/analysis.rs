//! Text analysis for allow-list scanning.
//!
//! Documentation text is split into tokens by a [`tokenizer`], tokens covered
//! by an allow-list are removed by a [`token_filter`], and [`scan`] ties the two
//! together to locate the words a spell-checker still has to judge.

pub mod scan;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
