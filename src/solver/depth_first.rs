//! Depth-limited DFS and iterative deepening.
//!
//! Both share one walker over an explicit stack, so the depth limit is bounded
//! by memory rather than by the thread stack. The current path is the only
//! tree kept in memory, so no arena is needed: the path vectors double as the
//! result.
use super::budget::Budget;
use super::frontier::{VisitScope, VisitedSet};
use super::{Outcome, Problem, SearchStats, Termination};
use crate::engine::{Move, PuzzleState};
use crate::successors::SuccessorGenerator;
use log::debug;
use std::vec;

enum Descent {
    Found,
    NotFound,
    Stopped(Termination),
}

/// What happened when the last state on the path was entered.
enum Visit {
    /// Children still to be walked, in generation order.
    Expanded(vec::IntoIter<(PuzzleState, Move)>),
    /// Cut off by the depth limit.
    Leaf,
    Done(Descent),
}

struct DepthLimited<'a, G> {
    goal: &'a PuzzleState,
    generator: &'a G,
    budget: &'a Budget,
    limit: u32,
    visited: VisitedSet,
    path: Vec<PuzzleState>,
    moves: Vec<Move>,
    /// Unwalked children of every expanded state on `path`, innermost last.
    pending: Vec<vec::IntoIter<(PuzzleState, Move)>>,
    /// Set when some node was cut off by `limit`; a round without cutoffs
    /// has seen everything reachable.
    cutoff: bool,
}

impl<'a, G: SuccessorGenerator> DepthLimited<'a, G> {
    fn new(problem: &'a Problem, generator: &'a G, budget: &'a Budget, limit: u32, scope: VisitScope) -> Self {
        let mut visited = VisitedSet::new(scope);
        visited.insert(problem.initial().clone());
        DepthLimited {
            goal: problem.goal(),
            generator,
            budget,
            limit,
            visited,
            path: vec![problem.initial().clone()],
            moves: Vec::new(),
            pending: Vec::new(),
            cutoff: false,
        }
    }

    /// Walks the tree below the root in canonical child order.
    fn descend(&mut self, stats: &mut SearchStats) -> Descent {
        match self.visit(stats) {
            Visit::Expanded(children) => self.pending.push(children),
            Visit::Leaf => return Descent::NotFound,
            Visit::Done(descent) => return descent,
        }

        while let Some(children) = self.pending.last_mut() {
            let visited = &mut self.visited;
            match children.find(|(child, _)| visited.insert(child.clone())) {
                Some((child, mv)) => {
                    self.path.push(child);
                    self.moves.push(mv);
                    match self.visit(stats) {
                        Visit::Expanded(children) => self.pending.push(children),
                        Visit::Leaf => self.backtrack(),
                        Visit::Done(descent) => return descent,
                    }
                }
                None => {
                    self.pending.pop();
                    // The root stays on the path.
                    if !self.pending.is_empty() {
                        self.backtrack();
                    }
                }
            }
        }
        Descent::NotFound
    }

    /// Expands the last state on `path`.
    fn visit(&mut self, stats: &mut SearchStats) -> Visit {
        if let Some(limit) = self.budget.exceeded(stats.nodes_expanded) {
            return Visit::Done(Descent::Stopped(limit));
        }
        let depth = self.moves.len() as u32;
        stats.nodes_expanded += 1;
        stats.max_depth_reached = stats.max_depth_reached.max(depth);
        stats.max_frontier_or_depth = stats.max_frontier_or_depth.max(self.path.len());

        let Some(current) = self.path.last() else {
            return Visit::Done(Descent::NotFound);
        };
        if current.is_goal(self.goal) {
            return Visit::Done(Descent::Found);
        }
        if depth >= self.limit {
            self.cutoff = true;
            return Visit::Leaf;
        }

        let children = self.generator.successors(current);
        stats.nodes_generated += children.len() as u64;

        // A goal child ends the search before any sibling subtree is entered.
        if let Some((goal, mv)) = children.iter().find(|(s, _)| s.is_goal(self.goal)) {
            if let Some(limit) = self.budget.exceeded(stats.nodes_expanded) {
                return Visit::Done(Descent::Stopped(limit));
            }
            stats.nodes_expanded += 1;
            stats.max_depth_reached = stats.max_depth_reached.max(depth + 1);
            self.path.push(goal.clone());
            self.moves.push(*mv);
            stats.max_frontier_or_depth = stats.max_frontier_or_depth.max(self.path.len());
            return Visit::Done(Descent::Found);
        }

        Visit::Expanded(children.into_iter())
    }

    fn backtrack(&mut self) {
        self.moves.pop();
        if let Some(state) = self.path.pop() {
            self.visited.leave(&state);
        }
    }
}

pub(crate) fn dfs<G: SuccessorGenerator>(
    problem: &Problem,
    generator: &G,
    depth_limit: u32,
    scope: VisitScope,
    budget: &Budget,
) -> Outcome {
    let mut stats = SearchStats {
        nodes_generated: 1,
        iterations: 1,
        ..SearchStats::default()
    };
    let mut walker = DepthLimited::new(problem, generator, budget, depth_limit, scope);
    match walker.descend(&mut stats) {
        Descent::Found => Outcome::solved(walker.path, walker.moves, stats),
        Descent::NotFound => Outcome::failed(Termination::Exhausted, stats),
        Descent::Stopped(reason) => Outcome::failed(reason, stats),
    }
}

/// Runs depth-limited DFS with limits `0..=max_depth`. Counters accumulate
/// over all rounds.
pub(crate) fn ids<G: SuccessorGenerator>(problem: &Problem, generator: &G, max_depth: u32, budget: &Budget) -> Outcome {
    let mut stats = SearchStats::default();

    for limit in 0..=max_depth {
        stats.iterations += 1;
        stats.nodes_generated += 1;
        let mut walker = DepthLimited::new(problem, generator, budget, limit, VisitScope::PathScoped);
        match walker.descend(&mut stats) {
            Descent::Found => return Outcome::solved(walker.path, walker.moves, stats),
            Descent::Stopped(reason) => return Outcome::failed(reason, stats),
            Descent::NotFound if !walker.cutoff => {
                debug!("ids: limit {} explored the whole space without cutoff", limit);
                return Outcome::failed(Termination::Exhausted, stats);
            }
            Descent::NotFound => {
                debug!("ids: limit {} done, {} expanded so far", limit, stats.nodes_expanded);
            }
        }
    }

    Outcome::failed(Termination::Exhausted, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::ResourceLimits;
    use crate::successors::SlidingMoves;

    fn two_move_problem() -> Problem {
        Problem::new(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]], 3).unwrap()
    }

    fn budget() -> Budget {
        Budget::start(ResourceLimits::default())
    }

    #[test]
    fn test_dfs_prunes_beyond_depth_limit() {
        let problem = two_move_problem();
        let outcome = dfs(&problem, &SlidingMoves, 1, VisitScope::PathScoped, &budget());
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert!(outcome.stats.max_depth_reached <= 1);
        // Root plus its four children; nothing below depth 1 is entered.
        assert_eq!(outcome.stats.nodes_expanded, 5);
    }

    #[test]
    fn test_dfs_depth_limit_zero_tests_root_only() {
        let problem = two_move_problem();
        let outcome = dfs(&problem, &SlidingMoves, 0, VisitScope::PathScoped, &budget());
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.stats.nodes_expanded, 1);
        assert_eq!(outcome.stats.nodes_generated, 1);
    }

    #[test]
    fn test_dfs_finds_solution_within_limit() {
        let problem = two_move_problem();
        let outcome = dfs(&problem, &SlidingMoves, 6, VisitScope::PathScoped, &budget());
        assert_eq!(outcome.termination, Termination::Solved);
        assert!(outcome.moves.len() >= 2 && outcome.moves.len() <= 6);
        // The 8-puzzle graph is bipartite, so every solution has even length here.
        assert_eq!(outcome.moves.len() % 2, 0);
        assert_eq!(problem.initial().apply_moves(&outcome.moves).as_ref(), Some(problem.goal()));
    }

    #[test]
    fn test_path_scope_revisits_what_global_scope_skips() {
        let problem = two_move_problem();
        let path_scoped = dfs(&problem, &SlidingMoves, 4, VisitScope::PathScoped, &budget());
        let global = dfs(&problem, &SlidingMoves, 4, VisitScope::Global, &budget());
        assert_eq!(path_scoped.termination, Termination::Solved);
        assert_eq!(global.termination, Termination::Solved);
        assert!(path_scoped.stats.nodes_expanded >= global.stats.nodes_expanded);
    }

    #[test]
    fn test_dfs_path_has_no_repeated_states() {
        let problem = Problem::new(&[vec![4, 1, 3], vec![7, 2, 5], vec![0, 8, 6]], 3).unwrap();
        let outcome = dfs(&problem, &SlidingMoves, 8, VisitScope::PathScoped, &budget());
        assert_eq!(outcome.termination, Termination::Solved);
        let mut seen = std::collections::HashSet::new();
        assert!(outcome.path.iter().all(|s| seen.insert(s.clone())));
    }

    #[test]
    fn test_ids_counts_accumulate_over_rounds() {
        let problem = two_move_problem();
        let outcome = ids(&problem, &SlidingMoves, 50, &budget());
        assert_eq!(outcome.termination, Termination::Solved);
        assert_eq!(outcome.moves, vec![Move::Down, Move::Right]);
        assert_eq!(outcome.stats.iterations, 3);

        let single = dfs(&problem, &SlidingMoves, 2, VisitScope::PathScoped, &budget());
        assert!(outcome.stats.nodes_expanded > single.stats.nodes_expanded);
    }

    #[test]
    fn test_ids_stops_at_max_depth() {
        let problem = Problem::new(&[vec![4, 1, 3], vec![7, 2, 5], vec![0, 8, 6]], 3).unwrap();
        let outcome = ids(&problem, &SlidingMoves, 3, &budget());
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert_eq!(outcome.stats.iterations, 4);
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn test_ids_exhausts_small_space_without_cutoff() {
        // Unreachable goal on a 2x2 board; once a round finishes without a
        // cutoff there is nothing deeper to try.
        let initial = PuzzleState::from_grid(&[vec![2, 1], vec![3, 0]]).unwrap();
        let problem = Problem::with_goal(initial, PuzzleState::goal(2).unwrap()).unwrap();
        let outcome = ids(&problem, &SlidingMoves, 50, &budget());
        assert_eq!(outcome.termination, Termination::Exhausted);
        assert!(outcome.stats.iterations < 51);
    }

    #[test]
    fn test_dfs_deep_limit_stops_on_node_budget() {
        use rand::{rngs::SmallRng, SeedableRng};
        let mut rng = SmallRng::seed_from_u64(1);
        let problem = Problem::from_state(PuzzleState::scrambled(4, 60, &mut rng).unwrap());
        let budget = Budget::start(ResourceLimits::default().with_node_limit(200_000));
        let outcome = dfs(&problem, &SlidingMoves, 1_000_000, VisitScope::PathScoped, &budget);
        assert_eq!(outcome.termination, Termination::NodeLimit);
        assert_eq!(outcome.stats.nodes_expanded, 200_000);
        assert!(outcome.stats.max_depth_reached > 10_000);
        assert!(outcome.path.is_empty());
    }

    #[test]
    fn test_goal_child_respects_node_limit() {
        let problem = Problem::new(&[vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]], 3).unwrap();
        let budget = Budget::start(ResourceLimits::default().with_node_limit(1));
        let outcome = dfs(&problem, &SlidingMoves, 5, VisitScope::PathScoped, &budget);
        assert_eq!(outcome.termination, Termination::NodeLimit);
        assert_eq!(outcome.stats.nodes_expanded, 1);

        let budget = Budget::start(ResourceLimits::default().with_node_limit(2));
        let outcome = dfs(&problem, &SlidingMoves, 5, VisitScope::PathScoped, &budget);
        assert_eq!(outcome.termination, Termination::Solved);
        assert_eq!(outcome.moves, vec![Move::Right]);
        assert_eq!(outcome.stats.nodes_expanded, 2);
    }
}
