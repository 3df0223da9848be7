//! Word and tokenizer properties.

use fieldmatch::{split_to_words, Word};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Any non-empty run without whitespace is a word and keeps its text.
    #[test]
    fn prop_word_round_trip(text in "\\S{1,16}") {
        let w = Word::new(&text).unwrap();
        prop_assert_eq!(w.as_str(), text.as_str());
        prop_assert_eq!(w.len(), text.chars().count());
        prop_assert_eq!(w.letters().iter().collect::<String>(), text);
    }

    /// Text with whitespace anywhere is never a word.
    #[test]
    fn prop_whitespace_rejected(a in "\\S{0,6}", ws in "\\s{1,3}", b in "\\S{0,6}") {
        let text = format!("{a}{ws}{b}");
        prop_assert!(Word::new(&text).is_err());
    }

    /// Joining words with any whitespace and splitting gives them back.
    #[test]
    fn prop_split_inverts_join(
        words in prop::collection::vec("\\S{1,8}", 0..10),
        sep in "\\s{1,3}",
    ) {
        let text = words.join(&sep);
        let split = split_to_words(&text);
        let got: Vec<&str> = split.iter().map(Word::as_str).collect();
        prop_assert_eq!(got, words.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// The tokenizer agrees with str::split_whitespace on arbitrary text.
    #[test]
    fn prop_split_matches_std(text in "\\PC{0,40}") {
        let split = split_to_words(&text);
        let got: Vec<&str> = split.iter().map(Word::as_str).collect();
        let expected: Vec<&str> = text.split_whitespace().collect();
        prop_assert_eq!(got, expected);
    }
}
