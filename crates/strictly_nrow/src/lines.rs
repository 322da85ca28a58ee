//! Winning-line enumeration.
//!
//! A line is a run of exactly `win_length` cells along one of four
//! directions. Every line that could decide a game is computed once per
//! [`BoardConfig`] and reused for every move of that game.

use super::config::BoardConfig;
use super::invariants::{InvariantSet, LineInBoard, LineInvariants};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Orientation of a line on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Direction {
    /// Left to right along a row.
    #[strum(to_string = "horizontal")]
    Horizontal,
    /// Top to bottom along a column.
    #[strum(to_string = "vertical")]
    Vertical,
    /// Top-left to bottom-right.
    #[strum(to_string = "diagonal")]
    DiagonalDown,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

impl Direction {
    /// Index distance between consecutive cells of a line on a board with `cols` columns.
    pub fn step(self, cols: usize) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => cols,
            Direction::DiagonalDown => cols + 1,
            Direction::AntiDiagonal => cols.saturating_sub(1),
        }
    }

    /// Row and column offsets between consecutive cells.
    pub fn delta(self) -> (usize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }

    /// Starting cells `(row, col)` of every run of `win_length` cells in this direction.
    ///
    /// Empty when the run does not fit the board in this direction.
    fn starts(self, rows: usize, cols: usize, win_length: usize) -> Vec<(usize, usize)> {
        if win_length == 0 || rows == 0 || cols == 0 {
            return Vec::new();
        }
        let fits_across = win_length <= cols;
        let fits_down = win_length <= rows;

        match self {
            Direction::Horizontal if fits_across => (0..rows)
                .flat_map(|r| (0..=cols - win_length).map(move |c| (r, c)))
                .collect(),
            // Column by column.
            Direction::Vertical if fits_down => (0..cols)
                .flat_map(|c| (0..=rows - win_length).map(move |r| (r, c)))
                .collect(),
            Direction::DiagonalDown if fits_across && fits_down => (0..=rows - win_length)
                .flat_map(|r| (0..=cols - win_length).map(move |c| (r, c)))
                .collect(),
            Direction::AntiDiagonal if fits_across && fits_down => (0..=rows - win_length)
                .flat_map(|r| (win_length - 1..cols).map(move |c| (r, c)))
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// A candidate winning line: `win_length` cell indices along one direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    direction: Direction,
    cells: Vec<usize>,
}

impl Line {
    /// Builds the line of `config.win_length()` cells starting at `(row, col)`.
    ///
    /// The result is not checked; see [`LineInvariants`].
    pub fn from_start(config: &BoardConfig, direction: Direction, row: usize, col: usize) -> Self {
        let first = row * config.cols() + col;
        let step = direction.step(config.cols());
        Self {
            direction,
            cells: (0..config.win_length()).map(|k| first + k * step).collect(),
        }
    }

    /// Creates a line from explicit cells.
    pub fn new(direction: Direction, cells: Vec<usize>) -> Self {
        Self { direction, cells }
    }

    /// Orientation of the line.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Cell indices in board order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Number of cells in the line.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true for a line without cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self
            .cells
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",");
        write!(f, "{} [{}]", self.direction, cells)
    }
}

/// Every candidate winning line for one configuration.
///
/// Lines are ordered horizontal, vertical, diagonal, anti-diagonal, each in
/// nested-loop order. Order carries no meaning for evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSet {
    lines: Vec<Line>,
}

impl LineSet {
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true when no line fits the board.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Number of lines along one direction.
    pub fn count_in(&self, direction: Direction) -> usize {
        self.lines
            .iter()
            .filter(|line| line.direction == direction)
            .count()
    }

    /// Lines passing through a cell.
    pub fn containing(&self, index: usize) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.contains(index))
    }
}

impl<'a> IntoIterator for &'a LineSet {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Enumerates every run of `win_length` cells on a `rows` x `cols` board.
///
/// Horizontal runs need `win_length <= cols`, vertical runs
/// `win_length <= rows`, and diagonal runs both. Degenerate input
/// (a zero argument, or a run longer than the board) yields no lines
/// rather than an error.
#[instrument]
pub fn enumerate_winning_lines(rows: usize, cols: usize, win_length: usize) -> LineSet {
    let config = BoardConfig::new(rows, cols, win_length);
    let mut lines = Vec::new();

    for direction in Direction::iter() {
        let before = lines.len();
        for (row, col) in direction.starts(rows, cols, win_length) {
            let line = Line::from_start(&config, direction, row, col);
            let check = LineInBoard::new(&line, config);
            if let Err(violations) = LineInvariants::check_all(&check) {
                warn!(%line, ?violations, "Dropping malformed line");
                continue;
            }
            lines.push(line);
        }
        debug!(%direction, count = lines.len() - before, "Enumerated lines");
    }

    if lines.is_empty() {
        debug!("No line fits the board");
    }

    LineSet { lines }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(set: &LineSet) -> Vec<Vec<usize>> {
        set.iter().map(|l| l.cells().to_vec()).collect()
    }

    #[test]
    fn test_classic_board_has_eight_lines() {
        let set = enumerate_winning_lines(3, 3, 3);
        assert_eq!(
            cells(&set),
            vec![
                vec![0, 1, 2],
                vec![3, 4, 5],
                vec![6, 7, 8],
                vec![0, 3, 6],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![0, 4, 8],
                vec![2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_horizontal_lines_stay_in_their_row() {
        let set = enumerate_winning_lines(2, 4, 3);
        let horizontal: Vec<_> = set
            .iter()
            .filter(|l| l.direction() == Direction::Horizontal)
            .map(|l| l.cells().to_vec())
            .collect();
        assert_eq!(
            horizontal,
            vec![vec![0, 1, 2], vec![1, 2, 3], vec![4, 5, 6], vec![5, 6, 7]]
        );
    }

    #[test]
    fn test_anti_diagonals_on_wide_board() {
        let set = enumerate_winning_lines(3, 4, 3);
        let anti: Vec<_> = set
            .iter()
            .filter(|l| l.direction() == Direction::AntiDiagonal)
            .map(|l| l.cells().to_vec())
            .collect();
        assert_eq!(anti, vec![vec![2, 5, 8], vec![3, 6, 9]]);
    }

    #[test]
    fn test_only_horizontal_when_board_is_too_short() {
        let set = enumerate_winning_lines(2, 5, 3);
        assert_eq!(set.count_in(Direction::Horizontal), 6);
        assert_eq!(set.count_in(Direction::Vertical), 0);
        assert_eq!(set.count_in(Direction::DiagonalDown), 0);
        assert_eq!(set.count_in(Direction::AntiDiagonal), 0);
    }

    #[test]
    fn test_zero_inputs_yield_nothing() {
        assert!(enumerate_winning_lines(0, 3, 3).is_empty());
        assert!(enumerate_winning_lines(3, 0, 3).is_empty());
        assert!(enumerate_winning_lines(3, 3, 0).is_empty());
    }

    #[test]
    fn test_win_length_one_marks_every_cell() {
        let set = enumerate_winning_lines(2, 2, 1);
        for direction in Direction::iter() {
            assert_eq!(set.count_in(direction), 4);
        }
    }

    #[test]
    fn test_containing_center() {
        let set = enumerate_winning_lines(3, 3, 3);
        assert_eq!(set.containing(4).count(), 4);
        assert_eq!(set.containing(1).count(), 2);
    }

    #[test]
    fn test_line_display() {
        let line = Line::new(Direction::Vertical, vec![1, 4, 7]);
        assert_eq!(line.to_string(), "vertical [1,4,7]");
    }
}
