// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query output and the accumulator that produces it.
//!
//! A document can match through many (query word, field, indexed word)
//! combinations. [`RelevancyMerger`] sums those contributions keyed by
//! document id only, so each document comes out exactly once.
//!
//! **Invariant**: Each document appears at most once in matcher output.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::Serialize;

use crate::corpus::DocumentId;
use crate::error::{MatchError, Result};

/// One scored document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub id: DocumentId,
    pub relevancy: f64,
}

/// Ordered `(document id, relevancy)` pairs.
///
/// Matcher output arrives sorted by relevancy. Anything added by hand stays
/// in insertion order until [`sort_by_relevancy`](Self::sort_by_relevancy).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchResults {
    results: Vec<ScoredDocument>,
}

impl MatchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_match(&mut self, id: DocumentId, relevancy: f64) {
        self.results.push(ScoredDocument { id, relevancy });
    }

    pub fn id(&self, i: usize) -> Result<DocumentId> {
        self.get(i).map(|r| r.id)
    }

    /// Same as [`id`](Self::id).
    pub fn document_id(&self, i: usize) -> Result<DocumentId> {
        self.id(i)
    }

    pub fn relevancy(&self, i: usize) -> Result<f64> {
        self.get(i).map(|r| r.relevancy)
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScoredDocument> {
        self.results.iter()
    }

    pub fn as_slice(&self) -> &[ScoredDocument] {
        &self.results
    }

    /// Append all of `other`, in its order.
    pub fn extend_from(&mut self, other: &MatchResults) {
        self.results.extend_from_slice(&other.results);
    }

    /// Append entry `i` of `other`.
    pub fn copy_result(&mut self, other: &MatchResults, i: usize) -> Result<()> {
        let entry = *other.get(i)?;
        self.results.push(entry);
        Ok(())
    }

    /// Highest relevancy first. Stable, so equal scores keep their order.
    pub fn sort_by_relevancy(&mut self) {
        self.results
            .sort_by(|a, b| b.relevancy.partial_cmp(&a.relevancy).unwrap_or(Ordering::Equal));
    }

    pub fn truncate(&mut self, len: usize) {
        self.results.truncate(len);
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    fn get(&self, i: usize) -> Result<&ScoredDocument> {
        self.results
            .get(i)
            .ok_or_else(|| MatchError::out_of_range(i, self.results.len()))
    }
}

impl<'a> IntoIterator for &'a MatchResults {
    type Item = &'a ScoredDocument;
    type IntoIter = std::slice::Iter<'a, ScoredDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Sums relevancy per document and emits each document once.
///
/// # Ordering
///
/// `into_sorted` orders by relevancy descending, then document id
/// ascending, so output does not depend on hash iteration order.
#[derive(Debug, Default)]
pub struct RelevancyMerger {
    scores: HashMap<DocumentId, f64>,
}

impl RelevancyMerger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, id: DocumentId, relevancy: f64) {
        *self.scores.entry(id).or_insert(0.0) += relevancy;
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Drop documents whose `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(DocumentId) -> bool) {
        self.scores.retain(|&id, _| keep(id));
    }

    /// Append every document with a positive total to `out`.
    pub fn into_sorted(self, out: &mut MatchResults) {
        let mut scored: Vec<ScoredDocument> = self
            .scores
            .into_iter()
            .filter(|&(_, relevancy)| relevancy > 0.0)
            .map(|(id, relevancy)| ScoredDocument { id, relevancy })
            .collect();
        scored.sort_by(compare_scored);
        out.results.extend(scored);
    }
}

/// Relevancy descending, then id ascending.
pub fn compare_scored(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.relevancy
        .partial_cmp(&a.relevancy)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.id.cmp(&b.id))
}
