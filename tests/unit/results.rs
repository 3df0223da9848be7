//! MatchResults, SearchParameters and ResultFilter tests.

use fieldmatch::{MatchError, MatchResults, ResultFilter, SearchParameters};

use crate::common::word;

#[test]
fn test_results_positional_access() {
    let mut results = MatchResults::new();
    results.add_match(42, 0.75);
    assert_eq!(results.id(0).unwrap(), 42);
    assert_eq!(results.relevancy(0).unwrap(), 0.75);
    assert!(matches!(
        results.id(1),
        Err(MatchError::IndexOutOfRange { index: 1, len: 1 })
    ));
}

#[test]
fn test_results_sort_descending_stable() {
    let mut results = MatchResults::new();
    results.add_match(1, 0.1);
    results.add_match(2, 0.3);
    results.add_match(3, 0.3);
    results.add_match(4, 0.2);
    results.sort_by_relevancy();
    let ids: Vec<u64> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 3, 4, 1]);
}

#[test]
fn test_results_serialize() {
    let mut results = MatchResults::new();
    results.add_match(7, 0.5);
    let json = serde_json::to_string(&results).unwrap();
    assert_eq!(json, r#"[{"id":7,"relevancy":0.5}]"#);
}

#[test]
fn test_parameters_defaults() {
    let params = SearchParameters::default();
    assert!(params.is_dynamic());
    assert!(params.result_filter().passes_everything());
    assert!(!params.is_nonsearching_field(&word("title")));
}

#[test]
fn test_filter_building() {
    let mut params = SearchParameters::new();
    let filter: &mut ResultFilter = params.result_filter_mut();
    filter.add_new_subterm(word("lang"), word("en"));
    assert_eq!(params.result_filter().num_terms(), 1);
    assert_eq!(params.result_filter().num_subterms(0).unwrap(), 1);
    assert_eq!(params.result_filter().field(0, 0).unwrap(), "lang");
    assert!(params.result_filter().word(0, 1).is_err());
}
