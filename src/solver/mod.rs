use crate::prelude::*;

mod astar;
pub use astar::*;

mod ida_star;
pub use ida_star::*;

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The cube was solved before searching.
    AlreadySolved,
    /// Moves that take the starting cube to solved.
    Found(Vec<Move>),
    /// The search budget ran out first.
    Exhausted,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }

    /// The moves to play; empty unless something was found.
    pub fn moves(&self) -> &[Move] {
        match self {
            Solution::Found(moves) => moves,
            Solution::AlreadySolved | Solution::Exhausted => &[],
        }
    }

    pub fn into_moves(self) -> Vec<Move> {
        match self {
            Solution::Found(moves) => moves,
            Solution::AlreadySolved | Solution::Exhausted => Vec::new(),
        }
    }
}

pub trait Solver {
    fn solve(&self, cube: &Cube) -> Solution;
}

impl Cube {
    pub fn solve_astar(&self, max_depth: u32, max_nodes: usize) -> Solution {
        AStar {
            max_depth,
            max_nodes,
        }
        .solve(self)
    }

    /// `None` or `Some(0)` iterations means no limit.
    pub fn solve_ida_star(&self, max_iterations: Option<u32>, iteration_depth: u32) -> Solution {
        IdaStar {
            max_iterations,
            iteration_depth,
        }
        .solve(self)
    }
}
