//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::corpus::{Corpus, Document, DocumentId};
use crate::text::Word;

/// Build a `Word`, panicking on invalid input. Test input only.
pub fn word(text: &str) -> Word {
    match Word::new(text) {
        Ok(w) => w,
        Err(e) => panic!("bad test word {text:?}: {e}"),
    }
}

/// A document with a single field.
pub fn make_doc(id: DocumentId, field: &str, text: &str) -> Document {
    let mut doc = Document::new(id);
    doc.add_text_str(word(field), text);
    doc
}

/// A document with several fields.
pub fn make_doc_fields(id: DocumentId, fields: &[(&str, &str)]) -> Document {
    let mut doc = Document::new(id);
    for (field, text) in fields {
        doc.add_text_str(word(field), text);
    }
    doc
}

/// The three-document corpus most matcher tests start from.
///
/// | id   | name                 |
/// |------|----------------------|
/// | 0    | abc def              |
/// | 10   | abe test             |
/// | 1000 | faraway donotmatchme |
pub fn sample_corpus() -> Corpus {
    [
        make_doc(0, "name", "abc def"),
        make_doc(10, "name", "abe test"),
        make_doc(1000, "name", "faraway donotmatchme"),
    ]
    .into_iter()
    .collect()
}

/// One document per text, ids 0.., all in `field`.
pub fn corpus_of(field: &str, texts: &[&str]) -> Corpus {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| make_doc(i as DocumentId, field, text))
        .collect()
}
