use crate::prelude::*;

use smallvec::SmallVec;

type Path = SmallVec<[Move; 24]>;

/// Iterative deepening on f = g + h, using [`CubieBound`] for h.
///
/// A single cube is turned forward and back along the current path, so memory
/// stays proportional to depth. Each pass raises the f threshold to the
/// smallest f that went over the previous one.
#[derive(Debug, Clone, Copy)]
pub struct IdaStar {
    /// Number of threshold raises allowed; `None` or `Some(0)` for no limit.
    pub max_iterations: Option<u32>,
    /// Paths never grow longer than this.
    pub iteration_depth: u32,
}

impl Default for IdaStar {
    fn default() -> Self {
        IdaStar {
            max_iterations: None,
            iteration_depth: 20,
        }
    }
}

enum Search {
    Found(Vec<Move>),
    NotFound(u32),
    Exhausted,
}

impl Search {
    fn best(self, other: Search) -> Search {
        match (self, other) {
            (Search::Found(moves), _) | (_, Search::Found(moves)) => Search::Found(moves),
            (Search::NotFound(a), Search::NotFound(b)) => Search::NotFound(a.min(b)),
            (Search::NotFound(f), Search::Exhausted) | (Search::Exhausted, Search::NotFound(f)) => {
                Search::NotFound(f)
            }
            (Search::Exhausted, Search::Exhausted) => Search::Exhausted,
        }
    }
}

impl Solver for IdaStar {
    fn solve(&self, cube: &Cube) -> Solution {
        if cube.is_solved() {
            return Solution::AlreadySolved;
        }
        init_tables();

        let start = std::time::Instant::now();
        let mut cube = cube.clone();
        let mut path = Path::new();
        let mut visited = 0;

        let mut threshold = CubieBound.estimate(&cube);
        let mut iterations = 0;
        let limit = self.max_iterations.filter(|&max| max > 0);
        log::info!(
            "IDA*: starting at threshold {}, depth <= {}, iterations <= {:?}",
            threshold,
            self.iteration_depth,
            limit
        );

        loop {
            log::debug!("IDA*: searching f <= {}", threshold);

            match self.search(&mut cube, &mut path, threshold, &mut visited) {
                Search::Found(moves) => {
                    log::info!(
                        "IDA*: found {} moves at threshold {}, visited {} nodes, took {:?}",
                        moves.len(),
                        threshold,
                        visited,
                        start.elapsed()
                    );
                    return Solution::Found(moves);
                }
                Search::Exhausted => {
                    log::info!(
                        "IDA*: nothing within depth {}, visited {} nodes, took {:?}",
                        self.iteration_depth,
                        visited,
                        start.elapsed()
                    );
                    return Solution::Exhausted;
                }
                Search::NotFound(next) => {
                    threshold = next;
                    iterations += 1;
                }
            }

            if limit.map_or(false, |max| iterations >= max) {
                log::info!(
                    "IDA*: gave up after {} iterations, visited {} nodes, took {:?}",
                    iterations,
                    visited,
                    start.elapsed()
                );
                return Solution::Exhausted;
            }
        }
    }
}

impl IdaStar {
    /// Depth-first search below the current path. Leaves `cube` and `path`
    /// exactly as it found them.
    fn search(
        &self,
        cube: &mut Cube,
        path: &mut Path,
        threshold: u32,
        visited: &mut u64,
    ) -> Search {
        *visited += 1;

        let g = path.len() as u32;
        let f = g + CubieBound.estimate(cube);
        if f > threshold {
            return Search::NotFound(f);
        }

        if cube.is_solved() {
            return Search::Found(path.to_vec());
        }

        if g >= self.iteration_depth {
            return Search::Exhausted;
        }

        let last_move = path.last().copied();
        let mut result = Search::Exhausted;
        for move_ in Move::all() {
            if last_move.map_or(false, |last| !move_.could_follow(&last)) {
                continue;
            }

            cube.apply_move(move_);
            path.push(move_);
            let sub = self.search(cube, path, threshold, visited);
            path.pop();
            cube.apply_move(move_.inverse());

            result = result.best(sub);
            if let Search::Found(_) = result {
                break;
            }
        }
        result
    }
}
