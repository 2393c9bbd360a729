//! A* and greedy best-first search over one shared loop.
//!
//! The priority queue uses lazy deletion: a state may be queued several times
//! and entries whose cost is worse than the best known `g` are skipped when
//! popped instead of being removed.
use super::arena::NodeArena;
use super::budget::Budget;
use super::frontier::PriorityFrontier;
use super::{Outcome, Problem, SearchStats, Termination};
use crate::engine::PuzzleState;
use crate::heuristics::{GoalPositions, Heuristic};
use crate::successors::SuccessorGenerator;
use std::collections::HashMap;

/// Frontier ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Order {
    /// `f = g + h`, ties to smaller `h`.
    AStar,
    /// `h` alone, ties to smaller `g`.
    Greedy,
}

impl Order {
    fn key(self, g: u32, h: u32) -> (u32, u32) {
        match self {
            Order::AStar => (g + h, h),
            Order::Greedy => (h, g),
        }
    }
}

pub(crate) fn search<G: SuccessorGenerator>(
    problem: &Problem,
    generator: &G,
    heuristic: Heuristic,
    order: Order,
    budget: &Budget,
) -> Outcome {
    let mut stats = SearchStats {
        nodes_generated: 1,
        max_frontier_or_depth: 1,
        iterations: 1,
        ..SearchStats::default()
    };
    let targets = GoalPositions::new(problem.goal());

    let mut arena = NodeArena::new();
    let root = arena.push_root(problem.initial().clone());
    let mut frontier = PriorityFrontier::new();
    frontier.push(order.key(0, heuristic.estimate(problem.initial(), &targets)), root);

    let mut best_g: HashMap<PuzzleState, u32> = HashMap::new();
    best_g.insert(problem.initial().clone(), 0);
    let mut closed: HashMap<PuzzleState, u32> = HashMap::new();

    while let Some((_, id)) = frontier.pop() {
        let node = arena.get(id);
        let g = node.depth;
        if best_g.get(&node.state).is_some_and(|&best| best < g) {
            continue;
        }
        if closed.get(&node.state).is_some_and(|&done| done <= g) {
            continue;
        }

        if let Some(limit) = budget.exceeded(stats.nodes_expanded) {
            return Outcome::failed(limit, stats);
        }
        stats.nodes_expanded += 1;
        stats.max_depth_reached = stats.max_depth_reached.max(g);
        closed.insert(node.state.clone(), g);

        if node.state.is_goal(problem.goal()) {
            let (path, moves) = arena.path_to(id);
            return Outcome::solved(path, moves, stats);
        }

        for (child, mv) in generator.successors(&node.state) {
            stats.nodes_generated += 1;
            let child_g = g + 1;
            if best_g.get(&child).is_some_and(|&best| best <= child_g) {
                continue;
            }
            best_g.insert(child.clone(), child_g);
            let h = heuristic.estimate(&child, &targets);
            let child_id = arena.push_child(id, child, mv);
            frontier.push(order.key(child_g, h), child_id);
        }
        stats.max_frontier_or_depth = stats.max_frontier_or_depth.max(frontier.len());
    }

    Outcome::failed(Termination::Exhausted, stats)
}
