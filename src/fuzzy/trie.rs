// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Letter trie over an arena of nodes.
//!
//! Words sharing a prefix share the path to it, so the fuzzy walk computes
//! each prefix's edit-distance row once no matter how many words hang off it.
//! Children are kept sorted by letter, which makes lookups a binary search and
//! the walk order deterministic.

/// Identifier of a distinct (case-folded) word inside a matcher.
pub type WordId = u32;

/// Position of a node in the arena. The root is always 0.
pub type NodeId = u32;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    word: Option<WordId>,
    children: Vec<(char, NodeId)>,
}

/// A trie mapping letter sequences to word ids.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
    num_words: usize,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
            num_words: 0,
        }
    }

    #[inline]
    pub fn root(&self) -> NodeId {
        0
    }

    /// Insert `letters` and tag the final node with `id`. Returns that node.
    ///
    /// Re-inserting a word overwrites its id.
    pub fn insert_word(&mut self, letters: &[char], id: WordId) -> NodeId {
        let mut node = self.root();
        for &letter in letters {
            node = match self.child(node, letter) {
                Some(next) => next,
                None => self.add_child(node, letter),
            };
        }
        let slot = &mut self.nodes[node as usize].word;
        if slot.is_none() {
            self.num_words += 1;
        }
        *slot = Some(id);
        node
    }

    /// The node reached by following `letters`, if the path exists.
    pub fn find(&self, letters: &[char]) -> Option<NodeId> {
        letters
            .iter()
            .try_fold(self.root(), |node, &letter| self.child(node, letter))
    }

    pub fn has_word(&self, letters: &[char]) -> bool {
        self.find(letters)
            .is_some_and(|node| self.word_id(node).is_some())
    }

    #[inline]
    pub fn word_id(&self, node: NodeId) -> Option<WordId> {
        self.nodes[node as usize].word
    }

    /// Children of `node`, sorted by letter.
    #[inline]
    pub fn children(&self, node: NodeId) -> &[(char, NodeId)] {
        &self.nodes[node as usize].children
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Distinct words stored.
    pub fn num_words(&self) -> usize {
        self.num_words
    }

    fn child(&self, node: NodeId, letter: char) -> Option<NodeId> {
        let children = &self.nodes[node as usize].children;
        children
            .binary_search_by_key(&letter, |&(l, _)| l)
            .ok()
            .map(|i| children[i].1)
    }

    fn add_child(&mut self, node: NodeId, letter: char) -> NodeId {
        let new_id = self.nodes.len() as NodeId;
        self.nodes.push(TrieNode::default());
        let children = &mut self.nodes[node as usize].children;
        let pos = children.partition_point(|&(l, _)| l < letter);
        children.insert(pos, (letter, new_id));
        new_id
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
