// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for end-to-end matching.
//!
//! Arbitrary corpora and queries must never panic, and output must stay
//! sorted with each document at most once.

#![no_main]

use std::collections::HashSet;

use arbitrary::Arbitrary;
use fieldmatch::{split_to_words, Corpus, Document, Matcher, Word};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    docs: Vec<(u64, String, String)>,
    query: String,
    primary: String,
}

fuzz_target!(|input: MatchInput| {
    let mut corpus = Corpus::new();
    for (id, field, text) in input.docs.into_iter().take(32) {
        let Ok(field) = Word::new(&field) else {
            continue;
        };
        let mut doc = Document::new(id);
        doc.add_text_str(field, &text);
        corpus.add_document(doc);
    }

    let matcher = Matcher::new();
    matcher.index(&corpus);

    let query = split_to_words(&input.query);
    let Ok(results) = matcher.match_text(&input.query) else {
        return;
    };
    let mut seen = HashSet::new();
    for pair in results.as_slice().windows(2) {
        assert!(pair[0].relevancy >= pair[1].relevancy);
    }
    for r in &results {
        assert!(r.relevancy > 0.0);
        assert!(seen.insert(r.id));
    }

    if let Ok(primary) = Word::new(&input.primary) {
        let _ = matcher.online_match(&query, &primary);
    }
});
