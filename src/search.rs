use std::collections::HashSet;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::graph::{NodeId, WordGraph};
use crate::ladder::{BestLadder, Ladder};

/// Find the highest scoring ladder in `graph`.
///
/// Every node is tried as the peak of a ladder, which is then grown
/// outward in both directions along graph edges, depth first. With the
/// `rayon` feature the peaks are searched in parallel.
///
/// An empty graph yields an empty ladder with score 0.
pub fn find_best_ladder(graph: &WordGraph) -> Ladder {
    Search::new(graph).run()
}

struct Search<'a> {
    graph: &'a WordGraph,
    best: BestLadder,
    /// Lowest possible score of any word in the graph: one point per letter.
    floor: u32,
}

impl<'a> Search<'a> {
    fn new(graph: &'a WordGraph) -> Search<'a> {
        Search {
            graph,
            best: BestLadder::new(),
            floor: graph.word_len() as u32,
        }
    }

    #[cfg(feature = "rayon")]
    fn run(self) -> Ladder {
        (0..self.graph.len())
            .into_par_iter()
            .for_each(|seed| self.search_from(seed));
        self.best.into_ladder()
    }

    #[cfg(not(feature = "rayon"))]
    fn run(self) -> Ladder {
        for seed in 0..self.graph.len() {
            self.search_from(seed);
        }
        self.best.into_ladder()
    }

    fn search_from(&self, seed: NodeId) {
        self.extend(Ladder::new(), HashSet::new(), seed, seed);
    }

    /// Extend `ladder` with `front` and `back`, then branch over all
    /// neighbor pairs of the new ends.
    ///
    /// `front == back` only holds for the seed call, which grows the
    /// ladder by a single node; every later call commits both.
    ///
    /// The ladder and the visited set are owned copies: sibling branches
    /// must never observe each other's extensions, two siblings may
    /// legitimately reuse the same node.
    fn extend(&self, mut ladder: Ladder, mut visited: HashSet<NodeId>, front: NodeId, back: NodeId) {
        let front_score = self.graph.node(front).score;
        let back_score = self.graph.node(back).score;
        debug_assert!(front_score >= self.floor && back_score >= self.floor);
        if !self.worth_extending(ladder.score(), front_score, back_score) {
            return;
        }

        visited.insert(front);
        ladder.push_front(front, front_score);
        if front != back {
            visited.insert(back);
            ladder.push_back(back, back_score);
        }
        self.best.observe(&ladder);

        for &head in self.graph.neighbors(front) {
            for &tail in self.graph.neighbors(back) {
                if head != tail && !visited.contains(&head) && !visited.contains(&tail) {
                    self.extend(ladder.clone(), visited.clone(), head, tail);
                }
            }
        }
    }

    /// Branch and bound check: project the best score this branch could
    /// still reach and compare it against the best found so far.
    ///
    /// The projection assumes an ideal descent on both sides, each further
    /// step scoring one point less than the previous, down to the floor.
    /// That is an upper bound on any real extension, so a branch rejected
    /// here can not hold an improvement. Only a strict improvement is
    /// worth exploring, hence the `+ 1`.
    fn worth_extending(&self, ladder_score: u32, front_score: u32, back_score: u32) -> bool {
        let mut possible_max = ladder_score;
        let mut top = front_score;
        let mut bottom = back_score;
        loop {
            if top != self.floor {
                possible_max += top;
                top -= 1;
            }
            if bottom != self.floor {
                possible_max += bottom;
                bottom -= 1;
            }
            if top == self.floor && bottom == top {
                return possible_max + 1 > self.best.score();
            }
        }
    }
}
