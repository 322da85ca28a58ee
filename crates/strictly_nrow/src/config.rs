//! Board dimensions and win length for a game session.

use super::lines::{LineSet, enumerate_winning_lines};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Dimensions and required run length, fixed once a game starts.
///
/// Cells are addressed in row-major order: `index = row * cols + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl BoardConfig {
    /// Creates a configuration. No validation is done here; see [`BoardConfig::fits`].
    #[instrument]
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Self {
        Self {
            rows,
            cols,
            win_length,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of aligned marks needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true when a winning run fits in both dimensions.
    pub fn fits(&self) -> bool {
        self.win_length >= 1 && self.win_length <= self.rows && self.win_length <= self.cols
    }

    /// Converts `(row, col)` into a cell index, if it lies on the board.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Row of a cell index.
    ///
    /// Returns 0 for a board without columns.
    pub fn row_of(&self, index: usize) -> usize {
        index.checked_div(self.cols).unwrap_or(0)
    }

    /// Column of a cell index.
    pub fn col_of(&self, index: usize) -> usize {
        index.checked_rem(self.cols).unwrap_or(0)
    }

    /// Enumerates every candidate winning line for this configuration.
    #[instrument]
    pub fn lines(&self) -> LineSet {
        enumerate_winning_lines(self.rows, self.cols, self.win_length)
    }
}
