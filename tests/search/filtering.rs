//! Result filters and non-searching fields.

use fieldmatch::{Corpus, SearchParameters};

use crate::common::{ids, indexed, make_doc_fields, run_with, word};

fn songs() -> Corpus {
    [
        make_doc_fields(1, &[("title", "yellow submarine"), ("lang", "en")]),
        make_doc_fields(2, &[("title", "yellow river"), ("lang", "en"), ("kind", "cover")]),
        make_doc_fields(3, &[("title", "keltainen jäänsärkijä"), ("lang", "fi")]),
        make_doc_fields(4, &[("title", "yellow"), ("lang", "fi")]),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_default_filter_passes_all() {
    let m = indexed(&songs());
    let results = run_with(&m, "yellow", &SearchParameters::new());
    assert_eq!(results.len(), 3);
}

#[test]
fn test_single_term_filter() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    params.result_filter_mut().add_new_subterm(word("lang"), word("fi"));
    assert_eq!(ids(&run_with(&m, "yellow", &params)), vec![4]);
}

#[test]
fn test_conjunction_within_term() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    let filter = params.result_filter_mut();
    filter.add_new_subterm(word("lang"), word("en"));
    filter.add_new_subterm(word("kind"), word("cover"));
    assert_eq!(ids(&run_with(&m, "yellow", &params)), vec![2]);
}

#[test]
fn test_disjunction_across_terms() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    let filter = params.result_filter_mut();
    filter.add_new_subterm(word("kind"), word("cover"));
    filter.add_new_term();
    filter.add_new_subterm(word("lang"), word("fi"));
    let mut got = ids(&run_with(&m, "yellow", &params));
    got.sort_unstable();
    assert_eq!(got, vec![2, 4]);
}

#[test]
fn test_filter_on_unknown_field_rejects() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    params.result_filter_mut().add_new_subterm(word("genre"), word("rock"));
    assert!(run_with(&m, "yellow", &params).is_empty());
}

#[test]
fn test_filter_words_fold_case() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    params.result_filter_mut().add_new_subterm(word("lang"), word("FI"));
    assert_eq!(ids(&run_with(&m, "yellow", &params)), vec![4]);
}

#[test]
fn test_nonsearching_field_is_skipped() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    // "en" exactly, "fi" at two edits, both in the lang field
    assert_eq!(run_with(&m, "en", &params).len(), 4);
    params.add_nonsearching_field(word("lang"));
    assert!(run_with(&m, "en", &params).is_empty());
}

#[test]
fn test_nonsearching_field_still_filters() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    params.add_nonsearching_field(word("lang"));
    params.result_filter_mut().add_new_subterm(word("lang"), word("en"));
    let mut got = ids(&run_with(&m, "yellow", &params));
    got.sort_unstable();
    assert_eq!(got, vec![1, 2]);
}

#[test]
fn test_non_dynamic_budget() {
    let m = indexed(&songs());
    let mut params = SearchParameters::new();
    params.add_nonsearching_field(word("title"));
    params.add_nonsearching_field(word("kind"));
    // "x" is two edits from "en" and "fi": too far for a one-letter word
    assert!(run_with(&m, "x", &params).is_empty());
    params.set_dynamic(false);
    assert_eq!(run_with(&m, "x", &params).len(), 4);
}
