//! Fuzzy multi-field document matching with a tunable letter cost model.
//!
//! Documents are made of named fields of whitespace-separated words. The
//! matcher indexes every field into a letter trie and answers queries by
//! weighted edit distance, so misspellings and confusable letters still find
//! the right document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   text      │────▶│   corpus     │────▶│    matcher       │
//! │ (Word,      │     │ (Document,   │     │ (index, match,   │
//! │  WordList,  │     │  Corpus)     │     │  online_match)   │
//! │  tokenizer) │     └──────────────┘     └──────────────────┘
//! └─────────────┘                             │          │
//!                                             ▼          ▼
//!                              ┌──────────────────┐ ┌──────────────┐
//!                              │     fuzzy        │ │   scoring    │
//!                              │ (ErrorValues,    │ │ (relevancy,  │
//!                              │  trie walk)      │ │  weights)    │
//!                              └──────────────────┘ └──────────────┘
//! ```
//!
//! Query-side types (`SearchParameters`, `ResultFilter`, `MatchResults`)
//! live in `search`.
//!
//! # Usage
//!
//! ```
//! use fieldmatch::{Corpus, Document, Matcher, Word};
//!
//! let field = Word::new("title").unwrap();
//! let mut doc = Document::new(1);
//! doc.add_text_str(field.clone(), "Fit Canvas to Layers");
//! let corpus: Corpus = [doc].into_iter().collect();
//!
//! let matcher = Matcher::new();
//! matcher.index(&corpus);
//! let results = matcher.match_text("fit canvsa").unwrap();
//! assert_eq!(results.id(0).unwrap(), 1);
//! ```

mod corpus;
mod error;
mod fuzzy;
mod matcher;
mod scoring;
mod search;
mod text;
mod utils;

#[doc(hidden)]
pub mod testing;

pub use corpus::{Corpus, Document, DocumentId};
pub use error::{MatchError, Result};
pub use fuzzy::{
    weighted_distance, weighted_distance_within, AccentGroup, ErrorMatrix, ErrorValues,
    IndexMatch, LevenshteinIndex, NodeId, Trie, WordId,
};
pub use matcher::{IndexStats, Matcher};
pub use scoring::{
    error_factor, frequency_factor, word_relevancy, IndexWeights, ERROR_SCALE,
    EXACT_COUNT_BONUS, EXACT_FIELD_BONUS,
};
pub use search::{
    MatchResults, RelevancyMerger, ResultFilter, ScoredDocument, SearchParameters, Subterm,
    SHORT_WORD_LENGTH,
};
pub use text::{split_to_words, split_with, Letter, Word, WordList};
pub use utils::fold_letters;

/// Initialize `env_logger` once. Honors `RUST_LOG`.
pub fn init_logger() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        env_logger::init();
        log::debug!("fieldmatch logging initialized");
    });
}
