// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One error type for the whole crate.
//!
//! Every fallible call reports synchronously at the point of the offending
//! call. Nothing is retried and nothing is swallowed. An unmatched query is
//! not an error: it is an empty `MatchResults`.

use thiserror::Error;

/// Everything that can go wrong when building or querying a matcher.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A `Word` was built from empty text or text containing whitespace.
    #[error("invalid token {text:?}: a word must be one non-empty run without whitespace")]
    InvalidToken { text: String },

    /// `Document::get_text` asked for a field that was never set.
    #[error("document has no field named {field:?}")]
    FieldNotFound { field: String },

    /// Positional access past the end of a container.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A query was issued before the first successful `Matcher::index`.
    #[error("matcher has no index yet; call index() before matching")]
    NotIndexed,

    /// A query named a field the published index does not contain.
    #[error("index has no field named {field:?}")]
    UnknownField { field: String },

    /// A letter was assigned to two different substitution groups.
    #[error("letter {letter:?} already belongs to a different error group")]
    LetterInTwoGroups { letter: char },

    /// Reading line-oriented input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;

impl MatchError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        MatchError::IndexOutOfRange { index, len }
    }
}
