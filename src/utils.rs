// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Case folding for comparison.
//!
//! Words keep their original text. Everything that compares letters (the
//! index, the fuzzy walk, exact online matching) goes through [`fold_letters`]
//! first, so "Hello" and "hello" are the same word to the matcher.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::text::Letter;

/// Fold `text` into the letter sequence used for matching.
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFC normalize, so a precomposed "é" and "e" + U+0301 fold alike
/// 2. Lowercase
///
/// Accents are kept. Treating "é" and "e" as close is the job of the
/// error tables, not of folding.
#[cfg(feature = "unicode-normalization")]
pub fn fold_letters(text: &str) -> Box<[Letter]> {
    text.nfc().flat_map(char::to_lowercase).collect()
}

/// Lowercase only. Assumes input is already NFC or ASCII.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_letters(text: &str) -> Box<[Letter]> {
    text.chars().flat_map(char::to_lowercase).collect()
}
