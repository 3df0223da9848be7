// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The immutable index a `Matcher` publishes.
//!
//! Building happens in two passes. The first walks the corpus once, folds
//! every word and interns it, and groups occurrences by field. The second
//! turns each field's occurrences into a trie plus a posting list. Fields are
//! independent, so with the `parallel` feature the second pass runs on rayon.
//!
//! Nothing here borrows from the corpus. Once built, the index is shared
//! read-only behind an `Arc`.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;

use crate::corpus::{Corpus, DocumentId};
use crate::fuzzy::{LevenshteinIndex, WordId};
use crate::search::ResultFilter;
use crate::text::{Letter, Word};
use crate::utils::fold_letters;

/// Bidirectional map between folded letter sequences and word ids.
#[derive(Debug, Default)]
pub(crate) struct WordStore {
    ids: HashMap<Box<[Letter]>, WordId>,
    words: Vec<Box<[Letter]>>,
}

impl WordStore {
    fn intern(&mut self, letters: Box<[Letter]>) -> WordId {
        if let Some(&id) = self.ids.get(&letters) {
            return id;
        }
        let id = self.words.len() as WordId;
        self.words.push(letters.clone());
        self.ids.insert(letters, id);
        id
    }

    pub(crate) fn id(&self, letters: &[Letter]) -> Option<WordId> {
        self.ids.get(letters).copied()
    }

    fn letters(&self, id: WordId) -> &[Letter] {
        &self.words[id as usize]
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

/// Everything known about one field across the corpus.
#[derive(Debug)]
pub(crate) struct FieldIndex {
    pub(crate) name: Word,
    pub(crate) fuzzy: LevenshteinIndex,
    postings: HashMap<WordId, BTreeSet<DocumentId>>,
    original_sizes: HashMap<DocumentId, usize>,
}

impl FieldIndex {
    fn build(name: Word, occurrences: FieldOccurrences, words: &WordStore) -> Self {
        let mut fuzzy = LevenshteinIndex::new();
        let mut postings: HashMap<WordId, BTreeSet<DocumentId>> = HashMap::new();
        for (doc, word) in occurrences.words {
            fuzzy.insert_word(words.letters(word), word);
            postings.entry(word).or_default().insert(doc);
        }
        log::trace!(
            "field {} has {} words and {} trie nodes",
            name,
            fuzzy.num_words(),
            fuzzy.num_nodes()
        );
        FieldIndex {
            name,
            fuzzy,
            postings,
            original_sizes: occurrences.sizes,
        }
    }

    /// Documents whose text for this field contains `word`, ascending.
    pub(crate) fn documents(&self, word: WordId) -> impl Iterator<Item = DocumentId> + '_ {
        self.postings.get(&word).into_iter().flatten().copied()
    }

    pub(crate) fn contains(&self, word: WordId, doc: DocumentId) -> bool {
        self.postings
            .get(&word)
            .is_some_and(|docs| docs.contains(&doc))
    }

    /// Word count of `doc`'s text in this field when it was indexed.
    pub(crate) fn original_size(&self, doc: DocumentId) -> usize {
        self.original_sizes.get(&doc).copied().unwrap_or(0)
    }
}

#[derive(Debug, Default)]
struct FieldOccurrences {
    words: Vec<(DocumentId, WordId)>,
    sizes: HashMap<DocumentId, usize>,
}

/// Counts describing a published index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub documents: usize,
    pub fields: usize,
    pub distinct_words: usize,
    pub trie_nodes: usize,
}

/// A complete, immutable snapshot of an indexed corpus.
#[derive(Debug)]
pub(crate) struct MatcherIndex {
    pub(crate) words: WordStore,
    /// Sorted by field name.
    pub(crate) fields: Vec<FieldIndex>,
    num_documents: usize,
}

impl MatcherIndex {
    pub(crate) fn build(corpus: &Corpus) -> Self {
        let start = Instant::now();
        let mut words = WordStore::default();
        let mut grouped: BTreeMap<Word, FieldOccurrences> = BTreeMap::new();

        for doc in corpus {
            for (field, text) in doc.fields() {
                let occurrences = grouped.entry(field.clone()).or_default();
                occurrences.sizes.insert(doc.id(), text.len());
                for word in text {
                    let id = words.intern(fold_letters(word.as_str()));
                    occurrences.words.push((doc.id(), id));
                }
            }
        }

        let grouped: Vec<(Word, FieldOccurrences)> = grouped.into_iter().collect();
        let fields: Vec<FieldIndex> = {
            #[cfg(feature = "parallel")]
            {
                grouped
                    .into_par_iter()
                    .map(|(name, occurrences)| FieldIndex::build(name, occurrences, &words))
                    .collect()
            }
            #[cfg(not(feature = "parallel"))]
            {
                grouped
                    .into_iter()
                    .map(|(name, occurrences)| FieldIndex::build(name, occurrences, &words))
                    .collect()
            }
        };

        log::debug!(
            "indexed {} documents into {} fields ({} distinct words) in {:.2?}",
            corpus.len(),
            fields.len(),
            words.len(),
            start.elapsed()
        );

        MatcherIndex {
            words,
            fields,
            num_documents: corpus.len(),
        }
    }

    pub(crate) fn field(&self, name: &Word) -> Option<&FieldIndex> {
        self.fields
            .binary_search_by(|f| f.name.cmp(name))
            .ok()
            .map(|i| &self.fields[i])
    }

    /// Does `doc` hold `word` in `field`, comparing folded letters?
    pub(crate) fn document_has_term(&self, field: &Word, word: &Word, doc: DocumentId) -> bool {
        let Some(field) = self.field(field) else {
            return false;
        };
        self.words
            .id(&fold_letters(word.as_str()))
            .is_some_and(|id| field.contains(id, doc))
    }

    /// True when some filter term has every subterm satisfied by `doc`.
    pub(crate) fn passes(&self, filter: &ResultFilter, doc: DocumentId) -> bool {
        filter.terms().any(|term| {
            term.iter()
                .all(|s| self.document_has_term(&s.field, &s.word, doc))
        })
    }

    pub(crate) fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.num_documents,
            fields: self.fields.len(),
            distinct_words: self.words.len(),
            trie_nodes: self.fields.iter().map(|f| f.fuzzy.num_nodes()).sum(),
        }
    }
}
