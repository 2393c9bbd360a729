//! Error type shared by board construction, parsing and strategy selection.
//!
//! Only configuration and construction problems are errors. An unsolvable
//! board or a search that runs out of budget is reported through a normal
//! [`SearchResult`](crate::solver::SearchResult) with `success == false`.

use crate::solver::Algorithm;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Wrong shape, out-of-range value, or a value repeated/missing.
    #[error("invalid board: {0}")]
    InvalidBoard(String),
    #[error("initial board is {initial}x{initial} but goal is {goal}x{goal}")]
    SizeMismatch { initial: usize, goal: usize },
    #[error("unknown algorithm '{0}' (expected one of bfs, dfs, ids, astar, greedy)")]
    UnknownAlgorithm(String),
    #[error("unknown heuristic '{0}' (expected one of manhattan, misplaced, linear_conflict)")]
    UnknownHeuristic(String),
    #[error("algorithm '{0}' requires a heuristic")]
    MissingHeuristic(Algorithm),
    #[error("could not parse board: {0}")]
    Parse(String),
}
