use std::convert::TryFrom;
use std::fmt;

use crate::{TileSet, Word};

/// Index of a [`WordNode`] in its [`WordGraph`].
pub type NodeId = usize;

/// A word and its tile score.
///
/// Nodes are created once during graph construction and never change.
#[derive(Debug, Clone)]
pub struct WordNode {
    pub word: Word,
    pub score: u32,
}

/// A directed graph over a set of same-length words.
///
/// An edge from word A to word B exists iff A and B differ in exactly one
/// letter position and B scores strictly lower than A. Every edge strictly
/// decreases the score, so the graph is acyclic and any walk along edges
/// terminates.
///
/// Nodes live in an arena indexed by [`NodeId`]; edge lists hold indices.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    nodes: Vec<WordNode>,
    edges: Vec<Vec<NodeId>>,
    word_len: usize,
}

impl fmt::Display for WordGraph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<WordGraph: {} words of length {}, {} edges>",
            self.nodes.len(),
            self.word_len,
            self.edge_count()
        )
    }
}

impl WordGraph {
    /// Build the graph for `words`, scored with `tileset`.
    ///
    /// Words are inserted in ascending score order (ties broken by word), so
    /// when a word is inserted every lower-scoring candidate is already
    /// present and no edge is missed. Each inserted word is compared against
    /// all earlier ones; the scan is quadratic in the word count.
    ///
    /// All words must have the same length; an empty word set yields an
    /// empty graph.
    pub fn new(words: &[Word], tileset: &TileSet) -> WordGraph {
        let mut scored: Vec<WordNode> = words
            .iter()
            .map(|&word| WordNode {
                word,
                score: tileset.score(&word),
            })
            .collect();
        scored.sort_by(|a, b| (a.score, a.word).cmp(&(b.score, b.word)));

        let word_len = scored.first().map_or(0, |node| node.word.len());
        let mut nodes: Vec<WordNode> = Vec::with_capacity(scored.len());
        let mut edges: Vec<Vec<NodeId>> = Vec::with_capacity(scored.len());
        for node in scored {
            debug_assert_eq!(node.word.len(), word_len);
            let links: Vec<NodeId> = nodes
                .iter()
                .enumerate()
                .filter(|(_, prev)| node.score > prev.score && node.word.is_adjacent(&prev.word))
                .map(|(id, _)| id)
                .collect();
            nodes.push(node);
            edges.push(links);
        }
        WordGraph {
            nodes,
            edges,
            word_len,
        }
    }

    /// The node with index `id`.
    /// ## Panics
    /// If `id` is not a valid index in this graph.
    pub fn node(&self, id: NodeId) -> &WordNode {
        &self.nodes[id]
    }

    /// The nodes reachable from `id` in one step, all strictly lower-scoring.
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        &self.edges[id]
    }

    /// Iterate over all nodes with their ids, in ascending score order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &WordNode)> {
        self.nodes.iter().enumerate()
    }

    /// Look up a word in the graph. Linear scan.
    pub fn find(&self, word: &str) -> Option<NodeId> {
        let word = Word::try_from(word).ok()?;
        self.nodes.iter().position(|node| node.word == word)
    }

    /// The number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The length of every word in the graph, 0 if the graph is empty.
    pub fn word_len(&self) -> usize {
        self.word_len
    }

    /// The total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }
}
