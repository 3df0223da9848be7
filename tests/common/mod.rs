//! Shared test utilities and fixtures.

#![allow(dead_code)]

use fieldmatch::{Corpus, DocumentId, Matcher, MatchResults, SearchParameters};

// Re-export canonical test utilities from fieldmatch::testing
pub use fieldmatch::testing::{corpus_of, make_doc, make_doc_fields, sample_corpus, word};

// ============================================================================
// MATCHER FIXTURES
// ============================================================================

/// A matcher with `corpus` indexed under default configuration.
pub fn indexed(corpus: &Corpus) -> Matcher {
    let matcher = Matcher::new();
    matcher.index(corpus);
    matcher
}

/// Run `query` with default parameters.
pub fn run(matcher: &Matcher, query: &str) -> MatchResults {
    matcher.match_text(query).expect("matcher is indexed")
}

/// Run `query` with explicit parameters.
pub fn run_with(matcher: &Matcher, query: &str, params: &SearchParameters) -> MatchResults {
    let mut results = MatchResults::new();
    matcher
        .match_with(&fieldmatch::split_to_words(query), params, &mut results)
        .expect("matcher is indexed");
    results
}

/// Result ids in order.
pub fn ids(results: &MatchResults) -> Vec<DocumentId> {
    results.iter().map(|r| r.id).collect()
}

/// Relevancy of `id`, if it was returned.
pub fn relevancy_of(results: &MatchResults, id: DocumentId) -> Option<f64> {
    results.iter().find(|r| r.id == id).map(|r| r.relevancy)
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Sorted by relevancy descending, ids ascending on ties, no duplicates.
pub fn assert_well_ordered(results: &MatchResults) {
    let slice = results.as_slice();
    for pair in slice.windows(2) {
        assert!(
            pair[0].relevancy > pair[1].relevancy
                || (pair[0].relevancy == pair[1].relevancy && pair[0].id < pair[1].id),
            "results out of order: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
    let mut seen = std::collections::HashSet::new();
    for r in slice {
        assert!(seen.insert(r.id), "document {} returned twice", r.id);
    }
}
