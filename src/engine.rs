//! Board representation for the sliding-tile N-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Move`: the four directions the blank can slide, in canonical order.
//! - `PuzzleState`: an immutable `n x n` board with a cached blank position,
//!   move application, successor enumeration, inversion parity and the
//!   solvability test, plus random board generation for experiments.
//!
//! Search bookkeeping (depth, parent, the move that produced a state) lives in
//! the solver's node arena, not here, so two states with the same tiles are
//! always equal and hash identically no matter how they were reached.
use crate::error::PuzzleError;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Value stored in one cell. `0` is the blank.
pub type Tile = u8;

/// Value used for the blank cell.
pub const BLANK: Tile = 0;

/// Largest supported board side. Every value `0..n*n` must fit in a `Tile`.
pub const MAX_SIZE: usize = 16;

/// A single move of the blank.
///
/// `Up` means "the blank moves up", i.e. the tile above the blank slides down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in the canonical expansion order used by every search.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row/column delta applied to the blank.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }

    /// Lower-case label (`"up"`, `"down"`, `"left"`, `"right"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Move {
    type Err = PuzzleError;

    /// Accepts the full label or its first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(Move::Up),
            "down" | "d" => Ok(Move::Down),
            "left" | "l" => Ok(Move::Left),
            "right" | "r" => Ok(Move::Right),
            other => Err(PuzzleError::Parse(format!("unknown move '{}'", other))),
        }
    }
}

/// An immutable `n x n` sliding-puzzle board.
///
/// Tiles are stored row-major. Equality and hashing depend only on the tiles,
/// so a `PuzzleState` can be used directly as a key in visited/closed sets.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleState {
    tiles: Box<[Tile]>,
    size: usize,
    blank: usize,
}

impl PuzzleState {
    /// Builds a state from a grid of rows.
    ///
    /// # Errors
    /// Returns `PuzzleError::InvalidBoard` if the grid is empty, not square,
    /// larger than `MAX_SIZE`, or does not contain every value `0..n*n`
    /// exactly once.
    ///
    /// # Examples
    /// ```
    /// use npuzzle_solver::engine::PuzzleState;
    /// let state = PuzzleState::from_grid(&[vec![1, 2], vec![3, 0]]).unwrap();
    /// assert_eq!(state.size(), 2);
    /// assert_eq!(state.blank(), (1, 1));
    /// ```
    pub fn from_grid(grid: &[Vec<Tile>]) -> Result<Self, PuzzleError> {
        let size = grid.len();
        if let Some((r, row)) = grid.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(PuzzleError::InvalidBoard(format!(
                "row {} has {} values, expected {}",
                r,
                row.len(),
                size
            )));
        }
        let tiles = grid.iter().flatten().copied().collect();
        Self::from_tiles(size, tiles)
    }

    /// Builds a state from `size * size` row-major values.
    pub fn from_tiles(size: usize, tiles: Vec<Tile>) -> Result<Self, PuzzleError> {
        validate_size(size)?;
        let cells = size * size;
        if tiles.len() != cells {
            return Err(PuzzleError::InvalidBoard(format!(
                "expected {} values for a {}x{} board, found {}",
                cells,
                size,
                size,
                tiles.len()
            )));
        }

        let mut seen = vec![false; cells];
        for &value in &tiles {
            let idx = value as usize;
            if idx >= cells {
                return Err(PuzzleError::InvalidBoard(format!(
                    "value {} is out of range 0..{}",
                    value,
                    cells - 1
                )));
            }
            if seen[idx] {
                return Err(PuzzleError::InvalidBoard(format!("value {} appears more than once", value)));
            }
            seen[idx] = true;
        }

        // Every value is in range and unique, so the blank is present.
        let blank = tiles.iter().position(|&t| t == BLANK).unwrap_or_default();
        Ok(PuzzleState {
            tiles: tiles.into_boxed_slice(),
            size,
            blank,
        })
    }

    /// The canonical goal: `1..n*n-1` in row-major order, blank in the last cell.
    ///
    /// ```
    /// use npuzzle_solver::engine::PuzzleState;
    /// let goal = PuzzleState::goal(3).unwrap();
    /// assert_eq!(goal.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
    /// ```
    pub fn goal(size: usize) -> Result<Self, PuzzleError> {
        validate_size(size)?;
        Ok(Self::canonical(size))
    }

    fn canonical(size: usize) -> Self {
        let cells = size * size;
        let tiles: Vec<Tile> = (1..cells).map(|v| v as Tile).chain(std::iter::once(BLANK)).collect();
        PuzzleState {
            tiles: tiles.into_boxed_slice(),
            size,
            blank: cells - 1,
        }
    }

    /// Generates a uniformly random solvable board.
    ///
    /// A random permutation is drawn; if it has the wrong parity two non-blank
    /// tiles are swapped, which flips the parity without touching the blank.
    pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        validate_size(size)?;
        let mut tiles: Vec<Tile> = (0..size * size).map(|v| v as Tile).collect();
        tiles.shuffle(rng);
        let mut state = Self::from_tiles(size, tiles)?;

        if !state.is_solvable(&Self::canonical(size)) {
            let non_blank: Vec<usize> = (0..state.tiles.len()).filter(|&i| i != state.blank).take(2).collect();
            if let [a, b] = non_blank.as_slice() {
                state.tiles.swap(*a, *b);
            }
        }
        Ok(state)
    }

    /// Scrambles the canonical goal with `moves` random blank moves.
    ///
    /// The walk never immediately undoes its previous move unless that is the
    /// only legal option, so the result is usually close to `moves` away from
    /// the goal. The board is always solvable.
    pub fn scrambled<R: Rng + ?Sized>(size: usize, moves: usize, rng: &mut R) -> Result<Self, PuzzleError> {
        let mut state = Self::goal(size)?;
        let mut last: Option<Move> = None;
        for _ in 0..moves {
            let mut options: Vec<Move> = state
                .legal_moves()
                .filter(|&m| Some(m.opposite()) != last)
                .collect();
            if options.is_empty() {
                options = state.legal_moves().collect();
            }
            let Some(&mv) = options.choose(rng) else {
                break;
            };
            if let Some(next) = state.apply_move(mv) {
                state = next;
                last = Some(mv);
            }
        }
        Ok(state)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major tiles.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside the board.
    pub fn tile(&self, r: usize, c: usize) -> Tile {
        assert!(r < self.size && c < self.size, "({}, {}) is outside a {}x{} board", r, c, self.size, self.size);
        self.tiles[r * self.size + c]
    }

    /// `(row, col)` of the blank.
    pub fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// `(row, col)` of `value`, or `None` if the value is not on this board.
    pub fn position_of(&self, value: Tile) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == value)
            .map(|i| (i / self.size, i % self.size))
    }

    /// The board as a vector of rows.
    pub fn to_grid(&self) -> Vec<Vec<Tile>> {
        self.tiles.chunks(self.size).map(|row| row.to_vec()).collect()
    }

    fn target_of(&self, mv: Move) -> Option<usize> {
        let (r, c) = self.blank();
        let (dr, dc) = mv.offset();
        let nr = r.checked_add_signed(dr)?;
        let nc = c.checked_add_signed(dc)?;
        (nr < self.size && nc < self.size).then_some(nr * self.size + nc)
    }

    /// Whether the blank can move in direction `mv`.
    pub fn can_move(&self, mv: Move) -> bool {
        self.target_of(mv).is_some()
    }

    /// Legal moves from this state, in canonical order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|&m| self.can_move(m))
    }

    /// Returns the state reached by moving the blank, or `None` if the move
    /// would leave the board.
    pub fn apply_move(&self, mv: Move) -> Option<Self> {
        let target = self.target_of(mv)?;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);
        Some(PuzzleState {
            tiles,
            size: self.size,
            blank: target,
        })
    }

    /// Applies a sequence of moves, stopping with `None` at the first illegal one.
    pub fn apply_moves(&self, moves: &[Move]) -> Option<Self> {
        moves.iter().try_fold(self.clone(), |state, &mv| state.apply_move(mv))
    }

    /// Every state one move away, paired with the move, in canonical order
    /// (up, down, left, right).
    pub fn successors(&self) -> Vec<(PuzzleState, Move)> {
        Move::ALL
            .into_iter()
            .filter_map(|mv| self.apply_move(mv).map(|next| (next, mv)))
            .collect()
    }

    /// Exact board equality with `goal`.
    pub fn is_goal(&self, goal: &PuzzleState) -> bool {
        self == goal
    }

    /// Number of pairs `(a, b)` with `a` before `b` in row-major order,
    /// ignoring the blank, such that `a > b`.
    pub fn inversion_count(&self) -> usize {
        let values: Vec<Tile> = self.tiles.iter().copied().filter(|&t| t != BLANK).collect();
        values
            .iter()
            .enumerate()
            .map(|(i, &a)| values[i + 1..].iter().filter(|&&b| b < a).count())
            .sum()
    }

    /// Parity invariant preserved by every blank move.
    ///
    /// Odd `n`: inversion parity. Even `n`: parity of inversions plus the
    /// blank's 1-based row counted from the bottom.
    fn parity_class(&self) -> usize {
        let inversions = self.inversion_count();
        if self.size % 2 == 1 {
            inversions % 2
        } else {
            let blank_row_from_bottom = self.size - self.blank().0;
            (inversions + blank_row_from_bottom) % 2
        }
    }

    /// Whether `goal` is reachable from this state.
    ///
    /// Against the canonical goal this is the classic test: for odd `n` the
    /// inversion count must be even; for even `n` the inversion count and the
    /// blank's row counted from the bottom must have opposite parity. For any
    /// other goal the two boards must share the same parity class.
    ///
    /// ```
    /// use npuzzle_solver::engine::PuzzleState;
    /// let goal = PuzzleState::goal(3).unwrap();
    /// let swapped = PuzzleState::from_grid(&[vec![1, 2, 3], vec![4, 5, 6], vec![8, 7, 0]]).unwrap();
    /// assert!(!swapped.is_solvable(&goal));
    /// ```
    pub fn is_solvable(&self, goal: &PuzzleState) -> bool {
        self.size == goal.size && self.parity_class() == goal.parity_class()
    }
}

fn validate_size(size: usize) -> Result<(), PuzzleError> {
    if size == 0 || size > MAX_SIZE {
        return Err(PuzzleError::InvalidBoard(format!(
            "board size must be between 1 and {}, got {}",
            MAX_SIZE, size
        )));
    }
    Ok(())
}

impl fmt::Display for PuzzleState {
    /// One row per line, right-aligned, blank shown as `_`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = (self.tiles.len() - 1).to_string().len();
        for (r, row) in self.tiles.chunks(self.size).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &value) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                if value == BLANK {
                    write!(f, "{:>width$}", "_", width = width)?;
                } else {
                    write!(f, "{:>width$}", value, width = width)?;
                }
            }
        }
        Ok(())
    }
}
