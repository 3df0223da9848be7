// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The matcher: index a corpus, then answer fuzzy queries against it.
//!
//! # Architecture
//!
//! ```text
//! Corpus ──index()──▶ MatcherIndex ──Arc swap──▶ published
//!                        │
//!          per field: LevenshteinIndex (trie + counts)
//!                     postings word → {doc ids}
//!                     original field sizes
//!
//! query ──fold──▶ find_words per (query word, field)
//!       ──best error per indexed word──▶ relevancy per doc ──▶ filter ──▶ sort
//! ```
//!
//! # Concurrency
//!
//! Queries clone the published `Arc` under a short read lock and then run
//! without it. `index()` builds off to the side and swaps under a short write
//! lock, so a query sees either the old index or the new one, never a mix.
//! Error values and field weights are read at the start of every query, so
//! changes apply to the next query without re-indexing.
//!
//! Do not hold the guard from [`Matcher::error_values`] or
//! [`Matcher::index_weights`] across a call into the same matcher's query
//! methods: a queued writer makes the nested read wait forever.

mod index;

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

pub use index::IndexStats;
use index::{FieldIndex, MatcherIndex};

use crate::corpus::{Corpus, DocumentId};
use crate::error::{MatchError, Result};
use crate::fuzzy::{ErrorValues, WordId};
use crate::scoring::{word_relevancy, IndexWeights, EXACT_COUNT_BONUS, EXACT_FIELD_BONUS};
use crate::search::{MatchResults, RelevancyMerger, SearchParameters};
use crate::text::{split_to_words, Word, WordList};
use crate::utils::fold_letters;

/// Fuzzy document matcher. `Send + Sync`; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct Matcher {
    index: RwLock<Option<Arc<MatcherIndex>>>,
    errors: RwLock<ErrorValues>,
    weights: RwLock<IndexWeights>,
}

impl Matcher {
    /// Default costs, every field weighing 1.0, nothing indexed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(errors: ErrorValues, weights: IndexWeights) -> Self {
        Matcher {
            index: RwLock::new(None),
            errors: RwLock::new(errors),
            weights: RwLock::new(weights),
        }
    }

    /// Index `corpus`, replacing whatever was indexed before.
    ///
    /// The matcher copies what it needs; `corpus` can be dropped afterwards.
    pub fn index(&self, corpus: &Corpus) {
        let built = Arc::new(MatcherIndex::build(corpus));
        *self.index.write() = Some(built);
    }

    pub fn is_indexed(&self) -> bool {
        self.index.read().is_some()
    }

    /// Match with default parameters, appending to `results`.
    pub fn match_query(&self, query: &WordList, results: &mut MatchResults) -> Result<()> {
        self.match_with(query, &SearchParameters::new(), results)
    }

    /// Tokenize `query` and match it with default parameters.
    pub fn match_text(&self, query: &str) -> Result<MatchResults> {
        let mut results = MatchResults::new();
        self.match_query(&split_to_words(query), &mut results)?;
        Ok(results)
    }

    /// Match `query`, appending qualifying documents to `results` sorted by
    /// relevancy descending, ties by document id ascending.
    pub fn match_with(
        &self,
        query: &WordList,
        params: &SearchParameters,
        results: &mut MatchResults,
    ) -> Result<()> {
        let index = self.current()?;
        if query.is_empty() {
            return Ok(());
        }

        let mut merger = RelevancyMerger::new();
        self.score_fuzzy(&index, query, params, &mut merger);

        let filter = params.result_filter();
        if !filter.passes_everything() {
            merger.retain(|doc| index.passes(filter, doc));
        }

        log::debug!("query {:?} matched {} documents", query.to_text(), merger.len());
        merger.into_sorted(results);
        Ok(())
    }

    /// Match where exact hits in `primary_field` dominate.
    ///
    /// Each query word found verbatim in a document's primary field adds
    /// [`EXACT_COUNT_BONUS`]. A document whose primary field consists of
    /// exactly the query words gets [`EXACT_FIELD_BONUS`] on top. Ordinary
    /// fuzzy relevancy is added last.
    pub fn online_match(&self, query: &WordList, primary_field: &Word) -> Result<MatchResults> {
        let index = self.current()?;
        let field = index
            .field(primary_field)
            .ok_or_else(|| MatchError::UnknownField {
                field: primary_field.to_string(),
            })?;

        let mut results = MatchResults::new();
        if query.is_empty() {
            return Ok(results);
        }

        let mut merger = RelevancyMerger::new();
        for (doc, count) in count_exacts(&index, field, query) {
            let mut score = EXACT_COUNT_BONUS * count as f64;
            if count == query.len() && count == field.original_size(doc) {
                score += EXACT_FIELD_BONUS;
            }
            merger.merge(doc, score);
        }
        self.score_fuzzy(&index, query, &SearchParameters::new(), &mut merger);

        merger.into_sorted(&mut results);
        Ok(results)
    }

    /// Current error values. Queries read them live.
    pub fn error_values(&self) -> RwLockReadGuard<'_, ErrorValues> {
        self.errors.read()
    }

    /// Current field weights. Queries read them live.
    pub fn index_weights(&self) -> RwLockReadGuard<'_, IndexWeights> {
        self.weights.read()
    }

    /// Edit the error values in place; the next query sees the change.
    pub fn update_error_values<R>(&self, f: impl FnOnce(&mut ErrorValues) -> R) -> R {
        f(&mut self.errors.write())
    }

    pub fn set_error_values(&self, errors: ErrorValues) {
        *self.errors.write() = errors;
    }

    pub fn set_weight(&self, field: Word, weight: f64) {
        self.weights.write().set_weight(field, weight);
    }

    pub fn set_index_weights(&self, weights: IndexWeights) {
        *self.weights.write() = weights;
    }

    /// Counts for the published index, `None` before the first `index()`.
    pub fn stats(&self) -> Option<IndexStats> {
        self.index.read().as_ref().map(|index| index.stats())
    }

    fn current(&self) -> Result<Arc<MatcherIndex>> {
        self.index.read().clone().ok_or(MatchError::NotIndexed)
    }

    /// Add fuzzy relevancy for every searchable field to `merger`.
    ///
    /// Within a field, an indexed word counts once, at the lowest error any
    /// query word reached it with.
    fn score_fuzzy(
        &self,
        index: &MatcherIndex,
        query: &WordList,
        params: &SearchParameters,
        merger: &mut RelevancyMerger,
    ) {
        let errors = self.errors.read();
        let weights = self.weights.read();
        let folded: Vec<(Box<[char]>, i32)> = query
            .iter()
            .map(|w| (fold_letters(w.as_str()), params.dynamic_error(w)))
            .collect();

        for field in &index.fields {
            if params.is_nonsearching_field(&field.name) {
                continue;
            }

            // deterministic summation order
            let mut best: BTreeMap<WordId, i32> = BTreeMap::new();
            for (letters, budget) in &folded {
                let found = field.fuzzy.find_words(letters, &errors, *budget);
                log::debug!(
                    "word {:?} in field {} with budget {}: {} candidates",
                    letters.iter().collect::<String>(),
                    field.name,
                    budget,
                    found.len()
                );
                for m in found {
                    best.entry(m.word)
                        .and_modify(|e| *e = (*e).min(m.error))
                        .or_insert(m.error);
                }
            }

            let weight = weights.weight(&field.name);
            let max_count = field.fuzzy.max_count();
            for (word, error) in best {
                let relevancy =
                    word_relevancy(error, field.fuzzy.word_count(word), max_count, weight);
                for doc in field.documents(word) {
                    merger.merge(doc, relevancy);
                }
            }
        }
    }
}

/// How many query words each document holds verbatim (after folding) in
/// `field`. Repeated query words count repeatedly.
fn count_exacts(
    index: &MatcherIndex,
    field: &FieldIndex,
    query: &WordList,
) -> BTreeMap<DocumentId, usize> {
    let mut counts = BTreeMap::new();
    for word in query {
        let Some(id) = index.words.id(&fold_letters(word.as_str())) else {
            continue;
        };
        for doc in field.documents(id) {
            *counts.entry(doc).or_insert(0) += 1;
        }
    }
    counts
}
