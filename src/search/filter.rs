// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result filters in disjunctive normal form.
//!
//! A filter is a list of terms; a term is a list of `(field, word)`
//! requirements that must all hold. A document passes when any term holds.
//! The default filter has one empty term, so everything passes.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::text::Word;

/// One exact `(field, word)` requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subterm {
    pub field: Word,
    pub word: Word,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFilter {
    terms: Vec<Vec<Subterm>>,
}

impl ResultFilter {
    pub fn new() -> Self {
        ResultFilter {
            terms: vec![Vec::new()],
        }
    }

    /// Start a new alternative. Later subterms go into it.
    pub fn add_new_term(&mut self) {
        self.terms.push(Vec::new());
    }

    /// Require `word` in `field` in the most recent term.
    pub fn add_new_subterm(&mut self, field: Word, word: Word) {
        if self.terms.is_empty() {
            self.terms.push(Vec::new());
        }
        if let Some(term) = self.terms.last_mut() {
            term.push(Subterm { field, word });
        }
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn num_subterms(&self, term: usize) -> Result<usize> {
        self.term(term).map(<[Subterm]>::len)
    }

    pub fn field(&self, term: usize, subterm: usize) -> Result<&Word> {
        self.subterm(term, subterm).map(|s| &s.field)
    }

    pub fn word(&self, term: usize, subterm: usize) -> Result<&Word> {
        self.subterm(term, subterm).map(|s| &s.word)
    }

    /// True when no term constrains anything.
    pub fn passes_everything(&self) -> bool {
        self.terms.iter().any(Vec::is_empty)
    }

    pub fn terms(&self) -> impl Iterator<Item = &[Subterm]> {
        self.terms.iter().map(Vec::as_slice)
    }

    fn term(&self, term: usize) -> Result<&[Subterm]> {
        self.terms
            .get(term)
            .map(Vec::as_slice)
            .ok_or_else(|| MatchError::out_of_range(term, self.terms.len()))
    }

    fn subterm(&self, term: usize, subterm: usize) -> Result<&Subterm> {
        let t = self.term(term)?;
        t.get(subterm).ok_or_else(|| MatchError::out_of_range(subterm, t.len()))
    }
}

impl Default for ResultFilter {
    fn default() -> Self {
        Self::new()
    }
}
