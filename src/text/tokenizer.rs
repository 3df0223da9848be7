// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting raw text into words.
//!
//! Whitespace runs separate tokens. Empty runs are dropped, so
//! `"this is  my text"` gives four words, not five.

use super::{Word, WordList};

/// Split on runs of Unicode whitespace.
pub fn split_to_words(text: &str) -> WordList {
    text.split_whitespace().map(Word::from_token).collect()
}

/// Split on whitespace and on any of `separators`.
///
/// Useful for inputs like `"path/to/file"` or `"a,b,c"` where punctuation
/// acts as a word boundary.
pub fn split_with(text: &str, separators: &[char]) -> WordList {
    text.split(|c: char| c.is_whitespace() || separators.contains(&c))
        .filter(|piece| !piece.is_empty())
        .map(Word::from_token)
        .collect()
}
