// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted edit distance, one-off and against a whole trie.
//!
//! The trie walk shares every prefix's matrix row between all words below it
//! and stops descending once no extension can get back under the budget.
//!
//! # Pruning
//!
//! A cell in row `d + 1` is built from row `d + 1` itself, row `d` or (for a
//! transposition) row `d - 1`, and costs never go negative. So the minimum of
//! row `d + 1` is at least `min(min(row d), min(row d - 1))`. Once both of
//! those exceed the budget the whole subtree is out of reach.
//!
//! The one-off functions fold both words the same way the matcher does.

use std::collections::HashMap;

use super::matrix::{fill_row, matrix_for};
use super::trie::{NodeId, Trie, WordId};
use super::ErrorValues;
use crate::text::{Letter, Word};
use crate::utils::fold_letters;

/// A word the walk found within budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMatch {
    pub word: WordId,
    pub error: i32,
}

/// Fuzzy-searchable word set for one field.
///
/// Also tracks how often each word was inserted, which feeds the
/// frequency dampening in relevancy.
#[derive(Debug, Clone, Default)]
pub struct LevenshteinIndex {
    trie: Trie,
    word_counts: HashMap<WordId, usize>,
    max_count: usize,
    longest_word_length: usize,
}

impl LevenshteinIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `letters` under `id`.
    pub fn insert_word(&mut self, letters: &[Letter], id: WordId) {
        self.trie.insert_word(letters, id);
        let count = self.word_counts.entry(id).or_insert(0);
        *count += 1;
        self.max_count = self.max_count.max(*count);
        self.longest_word_length = self.longest_word_length.max(letters.len());
    }

    /// Occurrences of `id` in this field. Zero for unknown words.
    pub fn word_count(&self, id: WordId) -> usize {
        self.word_counts.get(&id).copied().unwrap_or(0)
    }

    pub fn max_count(&self) -> usize {
        self.max_count
    }

    pub fn has_word(&self, letters: &[Letter]) -> bool {
        self.trie.has_word(letters)
    }

    pub fn num_nodes(&self) -> usize {
        self.trie.num_nodes()
    }

    pub fn num_words(&self) -> usize {
        self.trie.num_words()
    }

    pub fn longest_word_length(&self) -> usize {
        self.longest_word_length
    }

    /// Every indexed word whose weighted distance to `query` is at most
    /// `max_error`, cheapest first, ties by word id.
    pub fn find_words(&self, query: &[Letter], e: &ErrorValues, max_error: i32) -> Vec<IndexMatch> {
        let mut matches = Vec::new();
        if query.is_empty() || self.trie.num_words() == 0 {
            return matches;
        }

        let mut em = matrix_for(query, self.longest_word_length, e);

        struct Pending {
            node: NodeId,
            letter: Letter,
            previous: Option<Letter>,
            depth: usize,
            parent_min: i32,
        }

        let mut stack: Vec<Pending> = Vec::new();
        let root_min = em.min_error(0);
        for &(letter, node) in self.trie.children(self.trie.root()).iter().rev() {
            stack.push(Pending {
                node,
                letter,
                previous: None,
                depth: 1,
                parent_min: root_min,
            });
        }

        // Rows below `depth` always belong to the ancestors of the node
        // being popped: anything visited in between sat deeper in the stack.
        while let Some(p) = stack.pop() {
            fill_row(&mut em, query, p.letter, p.previous, p.depth, e);

            if let Some(word) = self.trie.word_id(p.node) {
                let error = em.total_error(p.depth);
                if error <= max_error {
                    matches.push(IndexMatch { word, error });
                }
            }

            let row_min = em.min_error(p.depth);
            if row_min.min(p.parent_min) > max_error {
                continue;
            }
            for &(letter, child) in self.trie.children(p.node).iter().rev() {
                stack.push(Pending {
                    node: child,
                    letter,
                    previous: Some(p.letter),
                    depth: p.depth + 1,
                    parent_min: row_min,
                });
            }
        }

        matches.sort_unstable_by_key(|m| (m.error, m.word));
        matches
    }
}

/// Weighted edit distance from `query` to `candidate`.
pub fn weighted_distance(query: &Word, candidate: &Word, e: &ErrorValues) -> i32 {
    let q = fold_letters(query.as_str());
    let c = fold_letters(candidate.as_str());
    distance_rows(&q, &c, e, None).unwrap_or(i32::MAX)
}

/// Weighted edit distance if it is at most `max`, `None` otherwise.
///
/// Two early exits: the length difference times the cheapest insertion or
/// deletion, and the pruning bound on matrix rows.
pub fn weighted_distance_within(
    query: &Word,
    candidate: &Word,
    e: &ErrorValues,
    max: i32,
) -> Option<i32> {
    let q = fold_letters(query.as_str());
    let c = fold_letters(candidate.as_str());

    let min_indel = e.min_indel_error();
    if min_indel > 0 {
        let diff = q.len().abs_diff(c.len()) as i64;
        if diff * i64::from(min_indel) > i64::from(max) {
            return None;
        }
    }

    distance_rows(&q, &c, e, Some(max)).filter(|&d| d <= max)
}

fn distance_rows(
    query: &[Letter],
    candidate: &[Letter],
    e: &ErrorValues,
    max: Option<i32>,
) -> Option<i32> {
    if query.is_empty() {
        return None;
    }
    let mut em = matrix_for(query, candidate.len(), e);
    let mut previous_min = em.min_error(0);
    for (i, &letter) in candidate.iter().enumerate() {
        let depth = i + 1;
        let previous = if i > 0 { Some(candidate[i - 1]) } else { None };
        fill_row(&mut em, query, letter, previous, depth, e);
        if let Some(max) = max {
            let row_min = em.min_error(depth);
            if row_min.min(previous_min) > max {
                return None;
            }
            previous_min = row_min;
        }
    }
    Some(em.total_error(candidate.len()))
}
