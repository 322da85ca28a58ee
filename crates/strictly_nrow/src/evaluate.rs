//! Win detection against a precomputed line set.

use super::board::Square;
use super::lines::{Line, LineSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of scanning a board for a completed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinResult {
    /// No line is fully held by one mark.
    NoWinner,
    /// Every cell of this line holds the same mark.
    Winner(Line),
}

impl WinResult {
    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<&Line> {
        match self {
            WinResult::NoWinner => None,
            WinResult::Winner(line) => Some(line),
        }
    }

    /// Returns true if a line is complete.
    pub fn is_winner(&self) -> bool {
        matches!(self, WinResult::Winner(_))
    }

    /// Mark holding the winning line on `squares`.
    pub fn winning_mark<'a, M>(&self, squares: &'a [Square<M>]) -> Option<&'a M> {
        let first = *self.line()?.cells().first()?;
        squares.get(first)?.mark()
    }
}

/// Checks if any line of `lines` is fully held by a single mark.
///
/// The first complete line found is returned. When several lines are
/// complete at once, which one is returned is unspecified. Cells outside
/// `squares` never match, so a board shorter than the lines' configuration
/// yields [`WinResult::NoWinner`] instead of panicking.
#[instrument(skip_all, fields(cells = squares.len(), lines = lines.len()))]
pub fn evaluate_board<M: PartialEq>(squares: &[Square<M>], lines: &LineSet) -> WinResult {
    for line in lines {
        if is_complete(squares, line) {
            debug!(%line, "Found winning line");
            return WinResult::Winner(line.clone());
        }
    }

    WinResult::NoWinner
}

fn is_complete<M: PartialEq>(squares: &[Square<M>], line: &Line) -> bool {
    let Some((&first, rest)) = line.cells().split_first() else {
        return false;
    };
    let Some(Square::Occupied(mark)) = squares.get(first) else {
        return false;
    };
    rest.iter()
        .all(|&cell| matches!(squares.get(cell), Some(Square::Occupied(m)) if m == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, enumerate_winning_lines};

    fn board_with(cells: usize, marks: &[(usize, char)]) -> Board<char> {
        marks.iter().fold(Board::new(cells), |board, &(i, m)| {
            board.with_mark(i, m).unwrap()
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let lines = enumerate_winning_lines(3, 3, 3);
        let board: Board<char> = Board::new(9);
        assert_eq!(evaluate_board(board.squares(), &lines), WinResult::NoWinner);
    }

    #[test]
    fn test_winner_top_row() {
        let lines = enumerate_winning_lines(3, 3, 3);
        let board = board_with(9, &[(0, 'X'), (1, 'X'), (2, 'X')]);
        let result = evaluate_board(board.squares(), &lines);
        assert_eq!(result.line().unwrap().cells(), &[0, 1, 2]);
        assert_eq!(result.winning_mark(board.squares()), Some(&'X'));
    }

    #[test]
    fn test_mixed_marks_do_not_win() {
        let lines = enumerate_winning_lines(3, 3, 3);
        let board = board_with(9, &[(0, 'X'), (1, 'O'), (2, 'X')]);
        assert!(!evaluate_board(board.squares(), &lines).is_winner());
    }

    #[test]
    fn test_no_winner_incomplete() {
        let lines = enumerate_winning_lines(3, 3, 3);
        let board = board_with(9, &[(0, 'O'), (4, 'O')]);
        assert_eq!(evaluate_board(board.squares(), &lines), WinResult::NoWinner);
    }

    #[test]
    fn test_short_board_does_not_panic() {
        let lines = enumerate_winning_lines(3, 3, 3);
        let board = board_with(4, &[(0, 'X'), (1, 'X'), (2, 'X'), (3, 'X')]);
        // Row [0, 1, 2] fits and wins; nothing past cell 3 is read as a match.
        assert!(evaluate_board(board.squares(), &lines).is_winner());

        let board = board_with(4, &[(0, 'X'), (3, 'X')]);
        assert_eq!(evaluate_board(board.squares(), &lines), WinResult::NoWinner);
    }

    #[test]
    fn test_empty_line_never_wins() {
        assert!(!is_complete::<char>(&[], &Line::new(crate::Direction::Horizontal, vec![])));
    }
}
