// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer and `Word` validation.
//!
//! Every piece the tokenizer emits must be a valid word, and the pieces must
//! be exactly what `split_whitespace` sees.

#![no_main]

use fieldmatch::{split_to_words, Word};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let words = split_to_words(text);
    let expected: Vec<&str> = text.split_whitespace().collect();
    assert_eq!(words.len(), expected.len());

    for (word, piece) in words.iter().zip(&expected) {
        assert_eq!(word.as_str(), *piece);
        assert!(Word::new(word.as_str()).is_ok());
    }

    // A whole text is a word only if it had no whitespace at all
    let whole = Word::new(text);
    assert_eq!(whole.is_ok(), expected.len() == 1 && expected[0] == text);
});
