// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: the cost model and the trie walk that applies it.
//!
//! [`ErrorValues`] prices every edit. [`LevenshteinIndex`] holds one field's
//! words in a trie and finds every word within an error budget of a query
//! word in a single pass.

mod error_values;
mod levenshtein;
mod matrix;
mod presets;
mod trie;

pub use error_values::*;
pub use levenshtein::*;
pub use matrix::ErrorMatrix;
pub use presets::*;
pub use trie::*;
