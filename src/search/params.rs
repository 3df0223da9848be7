// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ResultFilter;
use crate::fuzzy::ErrorValues;
use crate::text::Word;

/// Query words shorter than this get the tight budget in dynamic mode.
pub const SHORT_WORD_LENGTH: usize = 2;

/// Per-query knobs: error budgets, excluded fields, result filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchParameters {
    dynamic: bool,
    nonsearching_fields: BTreeSet<Word>,
    filter: ResultFilter,
}

impl SearchParameters {
    pub fn new() -> Self {
        SearchParameters {
            dynamic: true,
            nonsearching_fields: BTreeSet::new(),
            filter: ResultFilter::new(),
        }
    }

    pub fn set_dynamic(&mut self, dynamic: bool) {
        self.dynamic = dynamic;
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Error budget for one query word.
    ///
    /// Short words get a single edit's worth in dynamic mode, since two edits
    /// on a one-letter word match nearly anything.
    pub fn dynamic_error(&self, word: &Word) -> i32 {
        let default = ErrorValues::default_error();
        if self.dynamic && word.len() < SHORT_WORD_LENGTH {
            default
        } else {
            2 * default
        }
    }

    /// Exclude `field` from fuzzy search. It still takes part in filtering.
    pub fn add_nonsearching_field(&mut self, field: Word) {
        self.nonsearching_fields.insert(field);
    }

    pub fn is_nonsearching_field(&self, field: &Word) -> bool {
        self.nonsearching_fields.contains(field)
    }

    pub fn result_filter(&self) -> &ResultFilter {
        &self.filter
    }

    pub fn result_filter_mut(&mut self) -> &mut ResultFilter {
        &mut self.filter
    }
}

impl Default for SearchParameters {
    fn default() -> Self {
        Self::new()
    }
}
