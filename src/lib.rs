//! A word stepladder library for Rust.
//! <br>
//! This crate finds the highest scoring word ladder in a dictionary of
//! same-length words: a sequence of distinct words where each word is one
//! letter change away from the next, scored by summing the scrabble tile
//! values of every word in the ladder.
//!
//! The dictionary is turned into a directed graph with an edge between
//! every adjacent word pair, pointing from the higher to the strictly
//! lower scoring word. Every word is then tried as the peak of a ladder,
//! growing it outward in both directions at once, depth first, with a
//! branch and bound cutoff against the best ladder found so far. It can
//! use the `rayon` crate to search the peaks in parallel.
//!
//! # How to use `stepladder_solver`
//! Start by loading a [`Dictionary`] with the word length you are
//! interested in, build a [`WordGraph`] from it, and hand the graph to
//! [`find_best_ladder`]. The wordfile must be in utf-8 and contain one
//! word per line; lines of the wrong length or with characters outside
//! A..Z are skipped.
//!
//! # Basic usage
//! ```
//! # use stepladder_solver::{find_best_ladder, Dictionary, Error, TileSet, WordGraph};
//! let dictionary = Dictionary::from_words(&["sour", "spur", "spud", "stud", "stun"], 4)?;
//! let graph = WordGraph::new(dictionary.words(), &TileSet::new());
//! let best = find_best_ladder(&graph);
//! assert_eq!(best.score(), 26);
//! for (word, score) in best.entries(&graph) {
//!     println!("{} {}", word, score);
//! }
//! # Ok::<(), Error>(())
//! ```
mod dictionary;
mod error;
mod graph;
mod ladder;
mod search;
mod tiles;
mod word;

pub use crate::dictionary::Dictionary;
pub use crate::error::Error;
pub use crate::graph::{NodeId, WordGraph, WordNode};
pub use crate::ladder::{BestLadder, Ladder};
pub use crate::search::find_best_ladder;
pub use crate::tiles::TileSet;
pub use crate::word::{Word, MAX_WORD_LEN};
