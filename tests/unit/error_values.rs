//! ErrorValues tests through the public API.

use fieldmatch::{weighted_distance, AccentGroup, ErrorValues, MatchError};

use crate::common::word;

#[test]
fn test_defaults() {
    let e = ErrorValues::new();
    assert_eq!(ErrorValues::default_error(), 100);
    assert_eq!(e.substitute_error('a', 'b'), 100);
    assert_eq!(e.substitute_error('a', 'a'), 0);
    assert_eq!(e.substitute_error('ж', 'ж'), 0);
    assert_eq!(e.insertion_error(), 100);
    assert_eq!(e.deletion_error(), 100);
    assert_eq!(e.transpose_error(), 100);
}

#[test]
fn test_set_error_symmetric_both_paths() {
    let mut e = ErrorValues::new();
    // below U+0200 goes through the lookup table, Cyrillic through the map
    e.set_error('a', 'b', 1);
    e.set_error('ж', 'з', 7);
    assert_eq!(e.substitute_error('a', 'b'), 1);
    assert_eq!(e.substitute_error('b', 'a'), 1);
    assert_eq!(e.substitute_error('ж', 'з'), 7);
    assert_eq!(e.substitute_error('з', 'ж'), 7);
}

#[test]
fn test_clear_reverts() {
    let mut e = ErrorValues::new();
    e.set_error('a', 'b', 1);
    e.add_accents(AccentGroup::Latin).unwrap();
    e.clear_errors();
    assert_eq!(e.substitute_error('a', 'b'), 100);
    assert_eq!(e.substitute_error('e', 'é'), 100);
    // groups can be loaded again after clearing
    e.add_accents(AccentGroup::Latin).unwrap();
}

#[test]
fn test_groups() {
    let mut e = ErrorValues::new();
    e.set_group_error(&word("ijl"), 20).unwrap();
    assert_eq!(e.substitute_error('i', 'l'), 20);
    assert_eq!(e.substitute_error('j', 'i'), 20);
    assert!(e.is_in_group('j'));
    assert!(!e.is_in_group('k'));

    let err = e.set_group_error(&word("lk"), 20).unwrap_err();
    assert!(matches!(err, MatchError::LetterInTwoGroups { letter: 'l' }));
    // the failed group left nothing behind
    assert!(!e.is_in_group('k'));
}

#[test]
fn test_substring_mode_costs() {
    let mut e = ErrorValues::new();
    e.set_substring_mode();
    assert_eq!(
        e.end_deletion_error(),
        ErrorValues::DEFAULT_SUBSTRING_END_DELETION_ERROR
    );
    assert_eq!(
        e.start_insertion_error(ErrorValues::DEFAULT_SUBSTRING_START_LENGTH),
        ErrorValues::DEFAULT_SUBSTRING_START_INSERTION_ERROR
    );
    // short query words keep the ordinary insertion cost
    assert_eq!(e.start_insertion_error(1), e.insertion_error());
}

#[test]
fn test_presets_stack() {
    let mut e = ErrorValues::new();
    e.add_standard_errors().unwrap();
    e.add_accents(AccentGroup::Greek).unwrap();
    assert_eq!(e.substitute_error('a', 'á'), ErrorValues::DEFAULT_GROUP_ERROR);
    assert_eq!(e.substitute_error('q', 'w'), ErrorValues::DEFAULT_TYPO_ERROR);
    assert_eq!(e.substitute_error('ο', 'ό'), ErrorValues::DEFAULT_GROUP_ERROR);
}

#[test]
fn test_self_pair_is_ignored() {
    let mut e = ErrorValues::new();
    e.set_error('a', 'a', 70);
    e.set_error('一', '一', 70);
    assert_eq!(e.substitute_error('a', 'a'), 0);
    assert_eq!(e.substitute_error('一', '一'), 0);
    assert_eq!(weighted_distance(&word("abc"), &word("abc"), &e), 0);
}

#[test]
fn test_extreme_costs() {
    let mut e = ErrorValues::new();
    e.set_error('a', 'b', i32::MAX);
    assert_eq!(weighted_distance(&word("a"), &word("b"), &e), 200);
    e.set_insertion_error(i32::MAX);
    e.set_deletion_error(i32::MAX);
    assert_eq!(weighted_distance(&word("a"), &word("b"), &e), i32::MAX);

    let mut e = ErrorValues::new();
    e.set_error('a', 'b', -10);
    e.set_insertion_error(-10);
    assert_eq!(e.substitute_error('a', 'b'), 0);
    assert_eq!(e.insertion_error(), 0);
}

#[test]
fn test_skipping_a_query_letter_costs_the_same_anywhere() {
    let mut e = ErrorValues::new();
    e.set_insertion_error(10);
    e.set_deletion_error(100);
    let b = word("b");
    assert_eq!(weighted_distance(&word("ab"), &b, &e), 10);
    assert_eq!(weighted_distance(&word("ba"), &b, &e), 10);
}

#[test]
fn test_uppercase_pairs_apply_to_folded_text() {
    let mut e = ErrorValues::new();
    e.set_error('O', '0', 10);
    assert_eq!(weighted_distance(&word("FOO"), &word("F00"), &e), 20);
}
