use crate::engine::{PuzzleState, Tile, BLANK};
use crate::error::PuzzleError;
use std::fmt;
use std::str::FromStr;

/// Goal row and column of every tile value, looked up by value.
///
/// Built once per search so each heuristic evaluation is a single pass over
/// the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalPositions {
    size: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
}

impl GoalPositions {
    pub fn new(goal: &PuzzleState) -> Self {
        let size = goal.size();
        let cells = size * size;
        let mut rows = vec![0; cells];
        let mut cols = vec![0; cells];
        for (i, &value) in goal.tiles().iter().enumerate() {
            rows[value as usize] = i / size;
            cols[value as usize] = i % size;
        }
        GoalPositions { size, rows, cols }
    }

    /// Goal `(row, col)` of `value`.
    pub fn of(&self, value: Tile) -> (usize, usize) {
        (self.rows[value as usize], self.cols[value as usize])
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

/// The heuristics available to the informed searches.
///
/// All three are admissible for unit move cost and return `0` on the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heuristic {
    /// Sum of Manhattan distances of every non-blank tile.
    Manhattan,
    /// Number of non-blank tiles out of place.
    Misplaced,
    /// Manhattan distance plus two moves per linear conflict.
    LinearConflict,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [Heuristic::Manhattan, Heuristic::Misplaced, Heuristic::LinearConflict];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Misplaced => "misplaced",
            Heuristic::LinearConflict => "linear_conflict",
        }
    }

    /// Estimated number of moves from `state` to the goal described by `targets`.
    ///
    /// `targets` must come from a goal of the same size as `state`.
    pub fn estimate(self, state: &PuzzleState, targets: &GoalPositions) -> u32 {
        match self {
            Heuristic::Manhattan => manhattan_with(state, targets),
            Heuristic::Misplaced => misplaced_with(state, targets),
            Heuristic::LinearConflict => manhattan_with(state, targets) + 2 * linear_conflicts_with(state, targets),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "misplaced" => Ok(Heuristic::Misplaced),
            "linear_conflict" | "linear-conflict" | "manhattan_plus_linear_conflict" => Ok(Heuristic::LinearConflict),
            _ => Err(PuzzleError::UnknownHeuristic(s.to_string())),
        }
    }
}

/// Sum over all non-blank tiles of `|row - goal_row| + |col - goal_col|`.
///
/// # Examples
/// ```
/// use npuzzle_solver::engine::PuzzleState;
/// use npuzzle_solver::heuristics::manhattan;
/// let goal = PuzzleState::goal(3).unwrap();
/// let state = PuzzleState::from_grid(&[vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]).unwrap();
/// assert_eq!(manhattan(&state, &goal), 2);
/// ```
///
/// # Panics
/// If `state` and `goal` are not the same size.
pub fn manhattan(state: &PuzzleState, goal: &PuzzleState) -> u32 {
    manhattan_with(state, &GoalPositions::new(goal))
}

/// Count of non-blank tiles not on their goal cell.
///
/// `state` and `goal` must be the same size, as for [`manhattan`].
pub fn misplaced(state: &PuzzleState, goal: &PuzzleState) -> u32 {
    misplaced_with(state, &GoalPositions::new(goal))
}

/// `manhattan` plus `2 x` the number of linear conflicts.
///
/// `state` and `goal` must be the same size, as for [`manhattan`].
pub fn manhattan_plus_linear_conflict(state: &PuzzleState, goal: &PuzzleState) -> u32 {
    Heuristic::LinearConflict.estimate(state, &GoalPositions::new(goal))
}

/// Number of linear conflict pairs, rows and columns counted independently.
///
/// `state` and `goal` must be the same size, as for [`manhattan`].
pub fn linear_conflicts(state: &PuzzleState, goal: &PuzzleState) -> u32 {
    linear_conflicts_with(state, &GoalPositions::new(goal))
}

fn tiles_with_coords(state: &PuzzleState) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
    let size = state.size();
    state
        .tiles()
        .iter()
        .enumerate()
        .filter(|&(_, &value)| value != BLANK)
        .map(move |(i, &value)| (i / size, i % size, value))
}

fn manhattan_with(state: &PuzzleState, targets: &GoalPositions) -> u32 {
    assert_eq!(state.size(), targets.size(), "board and goal sizes differ");
    tiles_with_coords(state)
        .map(|(r, c, value)| {
            let (tr, tc) = targets.of(value);
            (r.abs_diff(tr) + c.abs_diff(tc)) as u32
        })
        .sum()
}

fn misplaced_with(state: &PuzzleState, targets: &GoalPositions) -> u32 {
    assert_eq!(state.size(), targets.size(), "board and goal sizes differ");
    tiles_with_coords(state)
        .filter(|&(r, c, value)| targets.of(value) != (r, c))
        .count() as u32
}

fn linear_conflicts_with(state: &PuzzleState, targets: &GoalPositions) -> u32 {
    assert_eq!(state.size(), targets.size(), "board and goal sizes differ");
    let size = state.size();
    let mut conflicts = 0;
    let mut line = Vec::with_capacity(size);

    for r in 0..size {
        line.clear();
        for c in 0..size {
            let value = state.tile(r, c);
            if value == BLANK {
                continue;
            }
            let (tr, tc) = targets.of(value);
            if tr == r {
                line.push(tc);
            }
        }
        conflicts += count_line_conflicts(&line);
    }

    for c in 0..size {
        line.clear();
        for r in 0..size {
            let value = state.tile(r, c);
            if value == BLANK {
                continue;
            }
            let (tr, tc) = targets.of(value);
            if tc == c {
                line.push(tr);
            }
        }
        conflicts += count_line_conflicts(&line);
    }

    conflicts
}

/// Counts reversed pairs among tiles that belong to one line, given their goal
/// offsets in current order. Each tile joins at most one pair; pairs are taken
/// greedily left to right, so this is a lower bound on the tiles that must
/// leave the line and not a maximum matching.
fn count_line_conflicts(goal_offsets: &[usize]) -> u32 {
    let mut paired = vec![false; goal_offsets.len()];
    let mut conflicts = 0;
    for i in 0..goal_offsets.len() {
        if paired[i] {
            continue;
        }
        let partner = (i + 1..goal_offsets.len()).find(|&j| !paired[j] && goal_offsets[j] < goal_offsets[i]);
        if let Some(j) = partner {
            paired[i] = true;
            paired[j] = true;
            conflicts += 1;
        }
    }
    conflicts
}
