//! Breadth-first search.
//!
//! Duplicates are filtered when a successor is generated, not when it is
//! dequeued, so every state enters the queue at most once.
use super::arena::NodeArena;
use super::budget::Budget;
use super::frontier::{FifoFrontier, VisitScope, VisitedSet};
use super::{Outcome, Problem, SearchStats, Termination};
use crate::successors::SuccessorGenerator;

pub(crate) fn search<G: SuccessorGenerator>(problem: &Problem, generator: &G, budget: &Budget) -> Outcome {
    let mut stats = SearchStats {
        nodes_generated: 1,
        max_frontier_or_depth: 1,
        iterations: 1,
        ..SearchStats::default()
    };

    let mut arena = NodeArena::new();
    let root = arena.push_root(problem.initial().clone());
    let mut visited = VisitedSet::new(VisitScope::Global);
    visited.insert(problem.initial().clone());
    let mut frontier = FifoFrontier::new();
    frontier.push(root);

    while let Some(id) = frontier.pop() {
        if let Some(limit) = budget.exceeded(stats.nodes_expanded) {
            return Outcome::failed(limit, stats);
        }
        stats.nodes_expanded += 1;

        let node = arena.get(id);
        stats.max_depth_reached = stats.max_depth_reached.max(node.depth);
        if node.state.is_goal(problem.goal()) {
            let (path, moves) = arena.path_to(id);
            return Outcome::solved(path, moves, stats);
        }

        for (child, mv) in generator.successors(&node.state) {
            stats.nodes_generated += 1;
            if visited.insert(child.clone()) {
                let child_id = arena.push_child(id, child, mv);
                frontier.push(child_id);
            }
        }
        stats.max_frontier_or_depth = stats.max_frontier_or_depth.max(frontier.len());
    }

    Outcome::failed(Termination::Exhausted, stats)
}
