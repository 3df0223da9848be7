//! Relevancy ordering: closeness, frequency, field weight, accumulation.

use fieldmatch::Corpus;

use crate::common::{
    assert_well_ordered, corpus_of, ids, indexed, make_doc, make_doc_fields, relevancy_of, run,
    word,
};

#[test]
fn test_exact_beats_one_substitution() {
    let m = indexed(&corpus_of("name", &["hello", "hallo"]));
    let results = run(&m, "hello");
    assert_eq!(ids(&results), vec![0, 1]);
    assert!(results.relevancy(0).unwrap() > results.relevancy(1).unwrap());
}

#[test]
fn test_field_weight_scales_relevancy() {
    let corpus: Corpus = [
        make_doc(1, "title", "alpha"),
        make_doc(2, "body", "alpha"),
    ]
    .into_iter()
    .collect();
    let m = indexed(&corpus);
    let before = run(&m, "alpha");
    assert_eq!(ids(&before), vec![1, 2]);
    assert_eq!(before.relevancy(0).unwrap(), before.relevancy(1).unwrap());

    m.set_weight(word("title"), 3.0);
    let after = run(&m, "alpha");
    let title = relevancy_of(&after, 1).unwrap();
    let body = relevancy_of(&after, 2).unwrap();
    assert!((title - 3.0 * body).abs() < 1e-12);
}

#[test]
fn test_zero_weight_drops_field() {
    let corpus: Corpus = [
        make_doc(1, "title", "alpha"),
        make_doc(2, "body", "alpha"),
    ]
    .into_iter()
    .collect();
    let m = indexed(&corpus);
    m.set_weight(word("body"), 0.0);
    assert_eq!(ids(&run(&m, "alpha")), vec![1]);
}

#[test]
fn test_rare_words_outrank_common_ones() {
    let m = indexed(&corpus_of("name", &["banana", "apple", "banana"]));
    let results = run(&m, "apple banana");
    // apple: 1 - 1/3; banana: 1 - 2/3, ties broken by id
    assert_eq!(ids(&results), vec![1, 0, 2]);
    assert_well_ordered(&results);
}

#[test]
fn test_contributions_sum_across_fields() {
    let corpus: Corpus = [
        make_doc_fields(1, &[("title", "rust"), ("body", "rust")]),
        make_doc_fields(2, &[("title", "rust"), ("body", "other")]),
    ]
    .into_iter()
    .collect();
    let m = indexed(&corpus);
    let results = run(&m, "rust");
    assert_eq!(ids(&results), vec![1, 2]);
    assert!(relevancy_of(&results, 1).unwrap() > relevancy_of(&results, 2).unwrap());
}

#[test]
fn test_more_query_words_matched_ranks_higher() {
    let m = indexed(&corpus_of(
        "name",
        &["quick brown fox", "quick red car", "slow green turtle"],
    ));
    let results = run(&m, "quick brown fox");
    assert_eq!(results.id(0).unwrap(), 0);
    assert!(relevancy_of(&results, 2).is_none());
}

#[test]
fn test_indexed_word_counts_once_per_field() {
    // "abc" and "abd" both reach "abc"; only the better error counts
    let m = indexed(&corpus_of("name", &["abc"]));
    let single = run(&m, "abc");
    let both = run(&m, "abc abd");
    assert_eq!(single.relevancy(0).unwrap(), both.relevancy(0).unwrap());
}

#[test]
fn test_ties_break_by_document_id() {
    let corpus: Corpus = [
        make_doc(30, "name", "same"),
        make_doc(10, "name", "same"),
        make_doc(20, "name", "same"),
    ]
    .into_iter()
    .collect();
    let m = indexed(&corpus);
    assert_eq!(ids(&run(&m, "same")), vec![10, 20, 30]);
}

#[test]
fn test_keyboard_preset_discounts_neighbour_typos() {
    let corpus = corpus_of("text", &["query"]);
    let plain = indexed(&corpus);
    let typo = run(&plain, "qiery");
    assert_eq!(typo.relevancy(0).unwrap(), 0.25);

    let mut errors = fieldmatch::ErrorValues::new();
    errors.add_keyboard_errors();
    let keyboard = fieldmatch::Matcher::with_config(errors, fieldmatch::IndexWeights::new());
    keyboard.index(&corpus);
    let discounted = run(&keyboard, "qiery");
    let expected = 0.5 * 100.0 / 130.0;
    assert!((discounted.relevancy(0).unwrap() - expected).abs() < 1e-12);
}
