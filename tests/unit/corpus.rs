//! Document and Corpus tests.

use std::io::Cursor;

use fieldmatch::{Corpus, Document, MatchError};

use crate::common::{make_doc_fields, word};

#[test]
fn test_document_fields() {
    let doc = make_doc_fields(3, &[("title", "Hello World"), ("body", "hello hello there")]);
    assert_eq!(doc.id(), 3);
    assert_eq!(doc.field_count(), 2);
    assert_eq!(doc.get_text(&word("title")).unwrap().len(), 2);
    assert_eq!(doc.word_count(&word("hello"), &word("body")), 2);
    assert_eq!(doc.word_count(&word("hello"), &word("title")), 0);
    assert_eq!(doc.total_word_count(&word("hello")), 2);

    let names: Vec<String> = doc.field_names().iter().map(|w| w.to_string()).collect();
    assert_eq!(names, vec!["body", "title"]);
}

#[test]
fn test_document_missing_field() {
    let doc = Document::new(1);
    assert!(matches!(
        doc.get_text(&word("nope")),
        Err(MatchError::FieldNotFound { .. })
    ));
}

#[test]
fn test_add_text_replaces() {
    let mut doc = Document::new(1);
    doc.add_text_str(word("name"), "first version");
    doc.add_text_str(word("name"), "second");
    assert_eq!(doc.field_count(), 1);
    assert_eq!(doc.get_text(&word("name")).unwrap().to_text(), "second");
}

#[test]
fn test_corpus_order_and_duplicates() {
    let mut corpus = Corpus::new();
    assert!(corpus.is_empty());
    corpus.add_document(Document::new(5));
    corpus.add_document(Document::new(1));
    corpus.add_document(Document::new(5));
    assert_eq!(corpus.len(), 3);
    let ids: Vec<u64> = corpus.iter().map(Document::id).collect();
    assert_eq!(ids, vec![5, 1, 5]);
    assert!(matches!(
        corpus.get_document(3),
        Err(MatchError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn test_corpus_from_lines() {
    let input = Cursor::new("first line\n\n   \nsecond line here\n");
    let corpus = Corpus::from_lines(input, &word("text")).unwrap();
    assert_eq!(corpus.len(), 2);
    let second = corpus.get_document(1).unwrap();
    assert_eq!(second.id(), 1);
    assert_eq!(second.get_text(&word("text")).unwrap().len(), 3);
}
