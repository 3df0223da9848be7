// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The cost model behind fuzzy matching.
//!
//! Every edit has a price. Substituting one letter for a visually or
//! phonetically confusable one should be cheap; substituting two unrelated
//! letters should cost the full default. Insertions, deletions and adjacent
//! transpositions have their own prices, and substring mode makes skipping
//! letters at either end of an indexed word cheap.
//!
//! Substitution lookup is the hottest path in the whole crate: it runs once
//! per trie node per query letter. Letters below U+0200 (ASCII, Latin-1,
//! Latin Extended-A/B) hit a flat lookup table. Everything else falls back to
//! the pair map and then the group map.
//!
//! # Invariants
//!
//! - `substitute_error(a, a) == 0`
//! - `substitute_error(a, b) == substitute_error(b, a)`
//! - The lookup table always agrees with the slow path.

use std::collections::HashMap;
use std::fmt;

use crate::error::{MatchError, Result};
use crate::text::{Letter, Word};

const LUT_BITS: u32 = 9;
const LUT_LETTERS: usize = 1 << LUT_BITS;
const LUT_SIZE: usize = LUT_LETTERS * LUT_LETTERS;

/// Letter substitution, insertion, deletion and transposition costs.
#[derive(Clone)]
pub struct ErrorValues {
    insertion_error: i32,
    deletion_error: i32,
    end_deletion_error: i32,
    start_insertion_error: i32,
    substitute_error: i32,
    transpose_error: i32,
    substring_start_limit: usize,

    /// Custom pair costs, keyed with the smaller letter first.
    single_errors: HashMap<(Letter, Letter), i32>,
    group_map: HashMap<Letter, usize>,
    group_errors: Vec<i32>,
    lut: Box<[i32]>,
}

impl ErrorValues {
    /// Cost of any edit nobody configured.
    pub const DEFAULT_ERROR: i32 = 100;
    /// Cost between letters of one accent group.
    pub const DEFAULT_GROUP_ERROR: i32 = 30;
    /// Cost between neighbouring keyboard keys.
    pub const DEFAULT_TYPO_ERROR: i32 = 30;
    pub const DEFAULT_SUBSTRING_END_DELETION_ERROR: i32 = 15;
    pub const DEFAULT_SUBSTRING_START_INSERTION_ERROR: i32 = 15;
    /// Query words shorter than this keep the full start insertion cost in
    /// substring mode.
    pub const DEFAULT_SUBSTRING_START_LENGTH: usize = 3;

    pub fn new() -> Self {
        let mut values = ErrorValues {
            insertion_error: Self::DEFAULT_ERROR,
            deletion_error: Self::DEFAULT_ERROR,
            end_deletion_error: Self::DEFAULT_ERROR,
            start_insertion_error: Self::DEFAULT_ERROR,
            substitute_error: Self::DEFAULT_ERROR,
            transpose_error: Self::DEFAULT_ERROR,
            substring_start_limit: 0,
            single_errors: HashMap::new(),
            group_map: HashMap::new(),
            group_errors: Vec::new(),
            lut: vec![0; LUT_SIZE].into_boxed_slice(),
        };
        values.clear_lut();
        values
    }

    /// The fixed cost of an unconfigured substitution.
    #[inline]
    pub const fn default_error() -> i32 {
        Self::DEFAULT_ERROR
    }

    #[inline]
    pub fn insertion_error(&self) -> i32 {
        self.insertion_error
    }

    #[inline]
    pub fn deletion_error(&self) -> i32 {
        self.deletion_error
    }

    /// Cost of dropping indexed letters after the query is used up.
    #[inline]
    pub fn end_deletion_error(&self) -> i32 {
        self.end_deletion_error
    }

    /// Cost of skipping indexed letters before the query starts.
    #[inline]
    pub fn start_insertion_error(&self, query_len: usize) -> i32 {
        if query_len >= self.substring_start_limit {
            self.start_insertion_error
        } else {
            self.insertion_error
        }
    }

    #[inline]
    pub fn transpose_error(&self) -> i32 {
        self.transpose_error
    }

    pub fn set_insertion_error(&mut self, e: i32) {
        self.insertion_error = non_negative(e);
    }

    pub fn set_deletion_error(&mut self, e: i32) {
        self.deletion_error = non_negative(e);
    }

    pub fn set_end_deletion_error(&mut self, e: i32) {
        self.end_deletion_error = non_negative(e);
    }

    pub fn set_start_insertion_error(&mut self, e: i32) {
        self.start_insertion_error = non_negative(e);
    }

    pub fn set_transpose_error(&mut self, e: i32) {
        self.transpose_error = non_negative(e);
    }

    pub fn set_substring_start_limit(&mut self, limit: usize) {
        self.substring_start_limit = limit;
    }

    /// Smallest cost of any single insertion or deletion.
    ///
    /// Each unit of length difference between two words needs at least one
    /// of these, which makes it a sound lower bound for early exits.
    pub fn min_indel_error(&self) -> i32 {
        self.insertion_error
            .min(self.deletion_error)
            .min(self.end_deletion_error)
            .min(self.start_insertion_error)
    }

    /// Cost of matching `l1` against `l2`.
    #[inline]
    pub fn substitute_error(&self, l1: Letter, l2: Letter) -> i32 {
        match lut_offset(l1, l2) {
            Some(offset) => self.lut[offset],
            None => self.resolve(l1, l2),
        }
    }

    /// Set the cost of the unordered pair `{l1, l2}`, replacing any earlier value.
    ///
    /// Both letters are lowercased first, the same way matching folds text,
    /// so `('O', '0')` and `('o', '0')` are the same pair. A letter paired
    /// with itself always costs 0 and is ignored here. Negative costs are
    /// clamped to 0.
    pub fn set_error(&mut self, l1: Letter, l2: Letter, error: i32) {
        let (l1, l2) = (fold_letter(l1), fold_letter(l2));
        if l1 == l2 {
            return;
        }
        let error = non_negative(error);
        self.single_errors.insert(ordered(l1, l2), error);
        self.write_lut(l1, l2, error);
    }

    /// Make every pair of letters in `group_letters` cost `error`.
    ///
    /// Letters are lowercased like in [`set_error`](Self::set_error) and a
    /// negative cost is clamped to 0. A letter can belong to one group only.
    /// The call is all-or-nothing: on conflict nothing is changed.
    pub fn set_group_error(&mut self, group_letters: &Word, error: i32) -> Result<()> {
        let error = non_negative(error);
        let mut letters: Vec<Letter> =
            group_letters.letters().iter().map(|&l| fold_letter(l)).collect();
        letters.sort_unstable();
        letters.dedup();
        self.check_group(&letters)?;

        let group_id = self.group_errors.len();
        self.group_errors.push(error);
        for &letter in &letters {
            self.group_map.insert(letter, group_id);
        }

        for (i, &l1) in letters.iter().enumerate() {
            for &l2 in &letters[i + 1..] {
                let resolved = self.resolve(l1, l2);
                self.write_lut(l1, l2, resolved);
            }
        }
        log::debug!("added error group {} with cost {}", group_letters, error);
        Ok(())
    }

    pub fn is_in_group(&self, letter: Letter) -> bool {
        self.group_map.contains_key(&fold_letter(letter))
    }

    /// Fails with the first of `letters` that already has a group.
    pub(crate) fn check_group(&self, letters: &[Letter]) -> Result<()> {
        match letters
            .iter()
            .map(|&l| fold_letter(l))
            .find(|l| self.group_map.contains_key(l))
        {
            Some(letter) => Err(MatchError::LetterInTwoGroups { letter }),
            None => Ok(()),
        }
    }

    /// Drop every custom pair and group. All substitutions cost the default again.
    pub fn clear_errors(&mut self) {
        self.single_errors.clear();
        self.group_errors.clear();
        self.group_map.clear();
        self.clear_lut();
    }

    /// Cheap start insertion and end deletion: a query word then matches a
    /// prefix, suffix or infix of a longer indexed word.
    pub fn set_substring_mode(&mut self) {
        self.start_insertion_error = Self::DEFAULT_SUBSTRING_START_INSERTION_ERROR;
        self.end_deletion_error = Self::DEFAULT_SUBSTRING_END_DELETION_ERROR;
        self.substring_start_limit = Self::DEFAULT_SUBSTRING_START_LENGTH;
    }

    /// The slow path: pair map, then group map, then the default.
    fn resolve(&self, l1: Letter, l2: Letter) -> i32 {
        if l1 == l2 {
            return 0;
        }
        if let Some(&error) = self.single_errors.get(&ordered(l1, l2)) {
            return error;
        }
        if let (Some(g1), Some(g2)) = (self.group_map.get(&l1), self.group_map.get(&l2)) {
            if g1 == g2 {
                return self.group_errors[*g1];
            }
        }
        self.substitute_error
    }

    fn clear_lut(&mut self) {
        for i in 0..LUT_LETTERS {
            for j in 0..LUT_LETTERS {
                self.lut[(i << LUT_BITS) | j] = if i == j { 0 } else { self.substitute_error };
            }
        }
    }

    fn write_lut(&mut self, l1: Letter, l2: Letter, value: i32) {
        if let (Some(a), Some(b)) = (lut_offset(l1, l2), lut_offset(l2, l1)) {
            self.lut[a] = value;
            self.lut[b] = value;
        }
    }
}

impl Default for ErrorValues {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorValues")
            .field("insertion_error", &self.insertion_error)
            .field("deletion_error", &self.deletion_error)
            .field("end_deletion_error", &self.end_deletion_error)
            .field("start_insertion_error", &self.start_insertion_error)
            .field("transpose_error", &self.transpose_error)
            .field("substring_start_limit", &self.substring_start_limit)
            .field("custom_pairs", &self.single_errors.len())
            .field("groups", &self.group_errors.len())
            .finish()
    }
}

/// Costs are never negative; the trie walk's pruning depends on it.
#[inline]
fn non_negative(error: i32) -> i32 {
    if error < 0 {
        log::warn!("clamping negative edit cost {error} to 0");
        0
    } else {
        error
    }
}

/// Lowercase one letter the way matching does. Letters whose lowercase
/// form is longer than one code point are kept as they are.
#[inline]
fn fold_letter(letter: Letter) -> Letter {
    let mut lower = letter.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => letter,
    }
}

#[inline]
fn ordered(l1: Letter, l2: Letter) -> (Letter, Letter) {
    if l1 <= l2 {
        (l1, l2)
    } else {
        (l2, l1)
    }
}

#[inline]
fn lut_offset(l1: Letter, l2: Letter) -> Option<usize> {
    let (a, b) = (l1 as usize, l2 as usize);
    if a < LUT_LETTERS && b < LUT_LETTERS {
        Some((a << LUT_BITS) | b)
    } else {
        None
    }
}
