use crate::prelude::*;

use core::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Best-first search ordered by f = g + h, using [`FaceletMismatch`] for h.
///
/// Every node owns its own copy of the cube. Nodes deeper than `max_depth`
/// are never created, and the search gives up after expanding `max_nodes`
/// nodes.
#[derive(Debug, Clone, Copy)]
pub struct AStar {
    pub max_depth: u32,
    pub max_nodes: usize,
}

impl Default for AStar {
    fn default() -> Self {
        AStar {
            max_depth: 24,
            max_nodes: 500_000,
        }
    }
}

impl Solver for AStar {
    fn solve(&self, cube: &Cube) -> Solution {
        if cube.is_solved() {
            return Solution::AlreadySolved;
        }

        let start = std::time::Instant::now();
        log::info!(
            "A*: searching depth <= {}, nodes <= {}",
            self.max_depth,
            self.max_nodes
        );

        let mut search = Search::new(cube.clone());
        let solution = search.run(self);

        log::info!(
            "A*: {} after expanding {} of {} nodes, took {:?}",
            match &solution {
                Solution::Found(moves) => format!("found {} moves", moves.len()),
                _ => "no solution".to_string(),
            },
            search.expanded,
            search.nodes.len(),
            start.elapsed()
        );
        solution
    }
}

struct Node {
    cube: Cube,
    g: u32,
    h: u32,
    parent: Option<(usize, Move)>,
}

struct Search {
    nodes: Vec<Node>,
    // (f, h, node index): ties go to the lower h, then to the older node.
    open: BinaryHeap<Reverse<(u32, u32, usize)>>,
    best_g: HashMap<u64, u32>,
    expanded: usize,
}

impl Search {
    fn new(root: Cube) -> Self {
        let h = FaceletMismatch.estimate(&root);

        let mut best_g = HashMap::new();
        best_g.insert(root.fingerprint(), 0);

        Search {
            nodes: vec![Node {
                cube: root,
                g: 0,
                h,
                parent: None,
            }],
            open: BinaryHeap::from(vec![Reverse((h, h, 0))]),
            best_g,
            expanded: 0,
        }
    }

    fn run(&mut self, limits: &AStar) -> Solution {
        while let Some(Reverse((_, _, id))) = self.open.pop() {
            let node = &self.nodes[id];

            // Stale entry, the state has since been reached more cheaply.
            let best = self.best_g.get(&node.cube.fingerprint());
            if best.map_or(false, |&best| best < node.g) {
                continue;
            }

            if node.h == 0 && node.cube.is_solved() {
                return Solution::Found(self.path_to(id));
            }

            if node.g >= limits.max_depth {
                continue;
            }

            if self.expanded >= limits.max_nodes {
                log::debug!("A*: expansion budget of {} used up", limits.max_nodes);
                return Solution::Exhausted;
            }
            self.expanded += 1;

            self.expand(id);
        }

        log::debug!("A*: open set empty");
        Solution::Exhausted
    }

    fn expand(&mut self, id: usize) {
        let cube = self.nodes[id].cube.clone();
        let g = self.nodes[id].g + 1;
        let last_move = self.nodes[id].parent.map(|(_, m)| m);

        for move_ in Move::all() {
            if last_move.map_or(false, |last| last.is_inverse_of(&move_)) {
                continue;
            }

            let next = cube.clone().apply(move_);
            let key = next.fingerprint();
            if self.best_g.get(&key).map_or(false, |&best| best <= g) {
                continue;
            }

            let h = FaceletMismatch.estimate(&next);
            self.best_g.insert(key, g);
            self.open.push(Reverse((g + h, h, self.nodes.len())));
            self.nodes.push(Node {
                cube: next,
                g,
                h,
                parent: Some((id, move_)),
            });
        }
    }

    fn path_to(&self, mut id: usize) -> Vec<Move> {
        let mut path = Vec::new();
        while let Some((parent, move_)) = self.nodes[id].parent {
            path.push(move_);
            id = parent;
        }
        path.reverse();
        path
    }
}
