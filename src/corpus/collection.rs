// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: an append-only log of documents.
//!
//! Duplicate ids are allowed. The corpus mirrors an input stream, not a keyed
//! store, so deduplication is left to callers that need it.

use std::io::BufRead;

use serde::{Deserialize, Serialize};

use super::{Document, DocumentId};
use crate::error::{MatchError, Result};
use crate::text::{split_to_words, Word};

/// Documents in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_document(&mut self, doc: Document) {
        self.documents.push(doc);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn get_document(&self, i: usize) -> Result<&Document> {
        self.documents
            .get(i)
            .ok_or_else(|| MatchError::out_of_range(i, self.documents.len()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// One document per non-blank line, stored under `field`.
    ///
    /// Ids count up from zero over the lines that were kept, so blank lines
    /// do not leave gaps.
    pub fn from_lines<R: BufRead>(reader: R, field: &Word) -> Result<Corpus> {
        let mut corpus = Corpus::new();
        for line in reader.lines() {
            let line = line?;
            let words = split_to_words(&line);
            if words.is_empty() {
                continue;
            }
            let mut doc = Document::new(corpus.len() as DocumentId);
            doc.add_text(field.clone(), words);
            corpus.add_document(doc);
        }
        Ok(corpus)
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Corpus {
            documents: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
