//! Word, WordList and tokenizer tests through the public API.

use fieldmatch::{split_to_words, split_with, MatchError, Word, WordList};

#[test]
fn test_word_round_trips_text() {
    for text in ["hello", "Hello", "తెలుగు", "naïve", "C++", "x"] {
        let w = Word::new(text).unwrap();
        assert_eq!(w.as_str(), text);
        assert_eq!(w.to_string(), text);
        assert_eq!(w.len(), text.chars().count());
    }
}

#[test]
fn test_word_rejects_whitespace_and_empty() {
    for bad in ["", " ", "two words", "tab\there", "line\nbreak", "nbsp\u{00a0}x"] {
        assert!(
            matches!(Word::new(bad), Err(MatchError::InvalidToken { .. })),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn test_word_equality_is_case_sensitive() {
    let lower = Word::new("abc").unwrap();
    let upper = Word::new("ABC").unwrap();
    assert_ne!(lower, upper);
    assert!(upper < lower);
}

#[test]
fn test_word_letter_access() {
    let w = Word::new("äbc").unwrap();
    assert_eq!(w.letter(0).unwrap(), 'ä');
    assert_eq!(w.letters(), &['ä', 'b', 'c']);
    assert!(matches!(
        w.letter(3),
        Err(MatchError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn test_word_join() {
    let a = Word::new("foo").unwrap();
    let b = Word::new("bar").unwrap();
    assert_eq!(a.join(&b).as_str(), "foobar");
}

#[test]
fn test_word_parses() {
    let w: Word = "parsed".parse().unwrap();
    assert_eq!(w, "parsed");
    assert!("not one".parse::<Word>().is_err());
    assert!(Word::try_from(String::from("owned")).is_ok());
}

#[test]
fn test_split_to_words_examples() {
    let words = split_to_words("this is  my text");
    let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
    assert_eq!(texts, vec!["this", "is", "my", "text"]);

    assert!(split_to_words("").is_empty());
    assert!(split_to_words(" \t\n ").is_empty());
    assert_eq!(split_to_words("  lead and trail  ").len(), 3);
}

#[test]
fn test_split_with_separators() {
    let words = split_with("path/to/file name", &['/']);
    let texts: Vec<&str> = words.iter().map(Word::as_str).collect();
    assert_eq!(texts, vec!["path", "to", "file", "name"]);
    assert!(split_with("///", &['/']).is_empty());
}

#[test]
fn test_word_list_access() {
    let mut list = WordList::new();
    list.add_word(Word::new("a").unwrap());
    list.add_word(Word::new("b").unwrap());
    list.add_word(Word::new("a").unwrap());
    assert_eq!(list.len(), 3);
    assert_eq!(list[2], "a");
    assert_eq!(list.get(1).unwrap(), "b");
    assert!(list.get(3).is_err());
    assert_eq!(list.to_text(), "a b a");
}
