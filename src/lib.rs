//! # N-Puzzle Solver Library
//!
//! This library solves the sliding-tile N-puzzle (8-, 15-, 24-puzzle and any
//! other square size up to 16x16) with five interchangeable search strategies
//! and reports the cost of each search.
//!
//! It is used by two binaries:
//! - `npuzzle`: solves one board (from a file or a seeded scramble) with a
//!   chosen algorithm and heuristic, or compares all of them.
//! - `strategy_evaluator`: runs every strategy over a batch of seeded boards
//!   and prints average cost per strategy.
//!
//! ## Modules
//! - `engine`: the immutable board (`PuzzleState`), blank moves (`Move`),
//!   solvability by inversion parity, and random board generation.
//! - `heuristics`: Manhattan distance, misplaced tiles and Manhattan plus
//!   linear conflicts, selected through the `Heuristic` enum.
//! - `successors`: the `SuccessorGenerator` seam between move model and search.
//! - `solver`: `Problem`, the five algorithms (BFS, depth-limited DFS, IDS, A*,
//!   greedy best-first) and `SearchResult`.
//! - `utils`: parsing boards from text.
//! - `error`: `PuzzleError`.
//!
//! ## Example
//! ```
//! use npuzzle_solver::heuristics::Heuristic;
//! use npuzzle_solver::solver::{solve, Problem, SearchOptions, Strategy};
//!
//! let problem = Problem::new(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]], 3).unwrap();
//! let result = solve(Strategy::AStar(Heuristic::Manhattan), &problem, &SearchOptions::default());
//! assert!(result.success);
//! assert_eq!(result.solution_length(), 2);
//! ```

pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod successors;
pub mod utils;

pub use error::PuzzleError;
