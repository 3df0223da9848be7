// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The atomic unit of text: one whitespace-free token.
//!
//! A `Word` keeps the caller's text byte-for-byte and the decoded code points
//! next to it. Matching works on letters, display works on the string, and
//! neither ever has to re-decode the other.
//!
//! # Invariants
//!
//! - Never empty.
//! - Contains no code point for which `char::is_whitespace` holds.
//! - `len()` counts code points, not bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};

/// One Unicode scalar value. Substitution costs are keyed by pairs of these.
pub type Letter = char;

/// An immutable, non-empty token with no whitespace in it.
///
/// Equality, ordering and hashing follow the code-point sequence, so words
/// work as map keys (field names) and as comparison units.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    text: Box<str>,
    letters: Box<[Letter]>,
}

impl Word {
    /// Build a word, rejecting empty text and any whitespace.
    pub fn new(text: &str) -> Result<Self> {
        if text.is_empty() || text.chars().any(char::is_whitespace) {
            return Err(MatchError::InvalidToken {
                text: text.to_string(),
            });
        }
        Ok(Self::from_token(text))
    }

    /// Build from a slice the tokenizer already proved is a single token.
    pub(crate) fn from_token(text: &str) -> Self {
        debug_assert!(!text.is_empty());
        debug_assert!(!text.chars().any(char::is_whitespace));
        Word {
            text: text.into(),
            letters: text.chars().collect(),
        }
    }

    /// The original text, unchanged.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of code points.
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false for a constructed word; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// The decoded code points.
    #[inline]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    /// Bounds-checked letter access.
    pub fn letter(&self, i: usize) -> Result<Letter> {
        self.letters
            .get(i)
            .copied()
            .ok_or_else(|| MatchError::out_of_range(i, self.letters.len()))
    }

    /// Concatenate two words into a new one.
    pub fn join(&self, other: &Word) -> Word {
        let mut text = String::with_capacity(self.text.len() + other.text.len());
        text.push_str(&self.text);
        text.push_str(&other.text);
        Word::from_token(&text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", &*self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl FromStr for Word {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self> {
        Word::new(s)
    }
}

impl TryFrom<&str> for Word {
    type Error = MatchError;

    fn try_from(s: &str) -> Result<Self> {
        Word::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = MatchError;

    fn try_from(s: String) -> Result<Self> {
        Word::new(&s)
    }
}

impl From<Word> for String {
    fn from(w: Word) -> Self {
        w.text.into_string()
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        &*self.text == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        &*self.text == *other
    }
}
