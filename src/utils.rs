use crate::engine::{PuzzleState, Tile, BLANK};
use crate::error::PuzzleError;

/// Parses a board from text.
///
/// Two layouts are accepted:
/// - one row per line, `n` lines of `n` values each;
/// - a single line holding all `n * n` values in row-major order.
///
/// Values are separated by whitespace and/or commas. The blank may be written
/// as `0`, `_` or `.`. Empty lines and lines starting with `#` are ignored.
///
/// # Returns
/// * `Ok(PuzzleState)` for a well-formed board.
/// * `Err(PuzzleError::Parse)` for an unreadable token or a shape that is
///   neither square rows nor a square-length single line.
/// * `Err(PuzzleError::InvalidBoard)` if the values are not `0..n*n` each once.
///
/// # Examples
/// ```
/// use npuzzle_solver::utils::board_from_str;
///
/// let rows = board_from_str("1 2 3\n4 _ 6\n7 5 8").unwrap();
/// let flat = board_from_str("1,2,3,4,0,6,7,5,8").unwrap();
/// assert_eq!(rows, flat);
/// assert_eq!(rows.blank(), (1, 1));
///
/// assert!(board_from_str("1 2 3\n4 X 6\n7 5 8").is_err());
/// assert!(board_from_str("1 2 3\n4 0").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<PuzzleState, PuzzleError> {
    let mut rows: Vec<Vec<Tile>> = Vec::new();
    for (line_no, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty())
            .map(|token| parse_tile(token, line_no + 1))
            .collect::<Result<Vec<Tile>, PuzzleError>>()?;
        rows.push(row);
    }

    match rows.as_slice() {
        [] => Err(PuzzleError::Parse("no values found".to_string())),
        [single] if single.len() > 1 => {
            let size = (1..).take_while(|n| n * n <= single.len()).last().unwrap_or(1);
            if size * size != single.len() {
                return Err(PuzzleError::Parse(format!(
                    "{} values on one line do not form a square board",
                    single.len()
                )));
            }
            PuzzleState::from_tiles(size, single.clone())
        }
        _ => {
            let size = rows.len();
            if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
                return Err(PuzzleError::Parse(format!(
                    "row {} has {} values, expected {}",
                    r + 1,
                    row.len(),
                    size
                )));
            }
            PuzzleState::from_grid(&rows)
        }
    }
}

fn parse_tile(token: &str, line_no: usize) -> Result<Tile, PuzzleError> {
    match token {
        "_" | "." => Ok(BLANK),
        _ => token.parse::<Tile>().map_err(|_| {
            PuzzleError::Parse(format!("unrecognized value '{}' on line {}", token, line_no))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_rows() {
        let board = board_from_str("1 2 3\n4 0 6\n7 5 8\n").unwrap();
        assert_eq!(board.to_grid(), vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]);
    }

    #[test]
    fn test_board_from_str_flat_line() {
        let board = board_from_str("1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 0").unwrap();
        assert_eq!(board, PuzzleState::goal(4).unwrap());
    }

    #[test]
    fn test_board_from_str_comments_and_blank_markers() {
        let text = "# an easy one\n\n1, 2, 3\n4, 5, 6\n7, ., 8\n";
        let board = board_from_str(text).unwrap();
        assert_eq!(board.blank(), (2, 1));
    }

    #[test]
    fn test_board_from_str_single_cell() {
        let board = board_from_str("0").unwrap();
        assert_eq!(board.size(), 1);
    }

    #[test]
    fn test_board_from_str_invalid_token() {
        let result = board_from_str("1 2 3\n4 X 6\n7 5 8");
        assert!(matches!(result, Err(PuzzleError::Parse(msg)) if msg.contains("'X' on line 2")));
    }

    #[test]
    fn test_board_from_str_ragged_rows() {
        let result = board_from_str("1 2 3\n4 0\n7 5 8");
        assert!(matches!(result, Err(PuzzleError::Parse(msg)) if msg.contains("row 2")));
    }

    #[test]
    fn test_board_from_str_non_square_line() {
        let result = board_from_str("1 2 3 0 4");
        assert!(matches!(result, Err(PuzzleError::Parse(msg)) if msg.contains("square")));
    }

    #[test]
    fn test_board_from_str_duplicate_values() {
        let result = board_from_str("1 1\n2 0");
        assert!(matches!(result, Err(PuzzleError::InvalidBoard(_))));
    }

    #[test]
    fn test_board_from_str_empty_input() {
        assert!(matches!(board_from_str("\n  \n# nothing"), Err(PuzzleError::Parse(_))));
    }

    #[test]
    fn test_display_round_trip() {
        let board = board_from_str("8 6 7\n2 5 4\n3 0 1").unwrap();
        assert_eq!(board_from_str(&board.to_string()).unwrap(), board);
    }
}
