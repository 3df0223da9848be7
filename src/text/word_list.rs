// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ordered sequences of words: document text and queries.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::Word;
use crate::error::{MatchError, Result};

/// An ordered, append-only list of words. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        WordList {
            words: Vec::with_capacity(capacity),
        }
    }

    /// Append a word at the end.
    pub fn add_word(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Bounds-checked access.
    pub fn get(&self, i: usize) -> Result<&Word> {
        self.words
            .get(i)
            .ok_or_else(|| MatchError::out_of_range(i, self.words.len()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Words joined by single spaces.
    pub fn to_text(&self) -> String {
        self.words
            .iter()
            .map(Word::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Panicking access, like slices. Use [`WordList::get`] for a `Result`.
impl Index<usize> for WordList {
    type Output = Word;

    fn index(&self, i: usize) -> &Word {
        &self.words[i]
    }
}

impl From<Vec<Word>> for WordList {
    fn from(words: Vec<Word>) -> Self {
        WordList { words }
    }
}

impl FromIterator<Word> for WordList {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        WordList {
            words: iter.into_iter().collect(),
        }
    }
}

impl Extend<Word> for WordList {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        self.words.extend(iter);
    }
}

impl IntoIterator for WordList {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
