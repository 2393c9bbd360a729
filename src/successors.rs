//! Move models used by the searches.
//!
//! Algorithms never call `PuzzleState::successors` directly; they go through a
//! `SuccessorGenerator`, so a different move model can be plugged in without
//! touching the search code.
use crate::engine::{Move, PuzzleState};

pub trait SuccessorGenerator {
    /// States one step away from `state`, paired with the move that reaches
    /// them. Every step costs 1.
    fn successors(&self, state: &PuzzleState) -> Vec<(PuzzleState, Move)>;
}

/// The standard model: the blank slides up, down, left or right, in that order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlidingMoves;

impl SuccessorGenerator for SlidingMoves {
    fn successors(&self, state: &PuzzleState) -> Vec<(PuzzleState, Move)> {
        state.successors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sliding_moves_matches_state_successors() {
        let s = PuzzleState::from_grid(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]).unwrap();
        let generated = SlidingMoves.successors(&s);
        assert_eq!(generated, s.successors());
        assert_eq!(generated.len(), 4);
        for (next, mv) in generated {
            assert_eq!(s.apply_move(mv), Some(next));
        }
    }
}
