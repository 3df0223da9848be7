// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for weighted edit distance under arbitrary cost tables.
//!
//! Checks the bounded variant against the full computation and the trie
//! search against both. If they disagree, queries silently miss documents.

#![no_main]

use arbitrary::Arbitrary;
use fieldmatch::{
    fold_letters, weighted_distance, weighted_distance_within, ErrorValues, LevenshteinIndex, Word,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    query: String,
    candidate: String,
    insertion: u8,
    deletion: u8,
    transpose: u8,
    custom: Vec<(char, char, u8)>,
    max: u16,
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(24).collect();
    let candidate: String = input.candidate.chars().take(24).collect();
    let (Ok(query), Ok(candidate)) = (Word::new(&query), Word::new(&candidate)) else {
        return;
    };

    let mut errors = ErrorValues::new();
    errors.set_insertion_error(i32::from(input.insertion));
    errors.set_deletion_error(i32::from(input.deletion));
    errors.set_transpose_error(i32::from(input.transpose));
    for &(a, b, cost) in input.custom.iter().take(16) {
        errors.set_error(a, b, i32::from(cost));
    }
    let max = i32::from(input.max);

    let full = weighted_distance(&query, &candidate, &errors);
    assert!(full >= 0);
    let within = weighted_distance_within(&query, &candidate, &errors, max);
    assert_eq!(within, (full <= max).then_some(full));

    let folded = fold_letters(candidate.as_str());
    let query_folded = fold_letters(query.as_str());

    let mut index = LevenshteinIndex::new();
    index.insert_word(&folded, 0);
    let found = index.find_words(&query_folded, &errors, max);
    match found.first() {
        Some(m) => assert_eq!(m.error, full),
        None => assert!(full > max),
    }
});
