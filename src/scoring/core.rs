// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevancy.
//!
//! ```text
//! relevancy = ERROR_SCALE / (ERROR_SCALE + error)
//!           * (1 - count / (max_count + 1))
//!           * field_weight
//! ```
//!
//! # Key Invariants
//!
//! - An exact match (error 0) scores higher than any fuzzy match of the same
//!   word in the same field.
//! - Frequency dampening is strictly positive: even the most common word in a
//!   field keeps `1 / (max_count + 1)` of its score.
//! - Relevancy is linear in field weight.
//!
//! # Constants
//!
//! | Constant | Value | Effect |
//! |----------|-------|--------|
//! | ERROR_SCALE | 100.0 | one default edit halves the score |
//! | EXACT_COUNT_BONUS | 2.0 | online mode, per exact query word hit |
//! | EXACT_FIELD_BONUS | 100.0 | online mode, field equals the query |

/// Error at which the closeness factor drops to one half.
pub const ERROR_SCALE: f64 = 100.0;

/// Online matching: bonus per query word found verbatim in the primary field.
pub const EXACT_COUNT_BONUS: f64 = 2.0;

/// Online matching: bonus when the primary field is exactly the query.
pub const EXACT_FIELD_BONUS: f64 = 100.0;

/// Closeness factor in `(0, 1]`. Negative errors are treated as zero.
#[inline]
pub fn error_factor(error: i32) -> f64 {
    let error = f64::from(error.max(0));
    ERROR_SCALE / (ERROR_SCALE + error)
}

/// Frequency dampening in `(0, 1)`. Common words in a field count for less.
#[inline]
pub fn frequency_factor(count: usize, max_count: usize) -> f64 {
    1.0 - count as f64 / (max_count as f64 + 1.0)
}

/// Relevancy contribution of one matched word in one field.
///
/// A negative or NaN weight is clamped to zero, which drops the contribution.
pub fn word_relevancy(error: i32, count: usize, max_count: usize, weight: f64) -> f64 {
    let weight = if weight.is_nan() || weight < 0.0 {
        log::warn!("clamping field weight {weight} to 0");
        0.0
    } else {
        weight
    };
    error_factor(error) * frequency_factor(count, max_count) * weight
}
