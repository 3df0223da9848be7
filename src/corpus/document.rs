// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Documents: an id and a set of named text fields.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::text::{split_to_words, Word, WordList};

/// Caller-supplied document identifier. Uniqueness is the caller's business.
pub type DocumentId = u64;

/// A document with named fields. Field iteration is in field-name order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: DocumentId,
    texts: BTreeMap<Word, WordList>,
}

impl Document {
    pub fn new(id: DocumentId) -> Self {
        Document {
            id,
            texts: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Set a field, replacing any previous content under the same name.
    pub fn add_text(&mut self, field: Word, text: WordList) {
        self.texts.insert(field, text);
    }

    /// Tokenize `text` and store it under `field`.
    pub fn add_text_str(&mut self, field: Word, text: &str) {
        self.add_text(field, split_to_words(text));
    }

    pub fn get_text(&self, field: &Word) -> Result<&WordList> {
        self.texts
            .get(field)
            .ok_or_else(|| MatchError::FieldNotFound {
                field: field.as_str().to_string(),
            })
    }

    /// Number of distinct field names currently set.
    pub fn field_count(&self) -> usize {
        self.texts.len()
    }

    pub fn field_names(&self) -> WordList {
        self.texts.keys().cloned().collect()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&Word, &WordList)> {
        self.texts.iter()
    }

    /// Occurrences of `word` in one field. Zero when the field is missing.
    pub fn word_count(&self, word: &Word, field: &Word) -> usize {
        self.texts
            .get(field)
            .map_or(0, |text| text.iter().filter(|w| *w == word).count())
    }

    /// Occurrences of `word` across every field.
    pub fn total_word_count(&self, word: &Word) -> usize {
        self.texts
            .values()
            .map(|text| text.iter().filter(|w| *w == word).count())
            .sum()
    }
}
