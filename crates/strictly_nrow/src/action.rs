//! First-class move types.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their mark on a cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move<M> {
    /// The mark being placed.
    pub mark: M,
    /// Row-major index of the target cell.
    pub index: usize,
}

impl<M: std::fmt::Debug> Move<M> {
    /// Creates a new move.
    #[instrument]
    pub fn new(mark: M, index: usize) -> Self {
        Self { mark, index }
    }
}

impl<M> Move<M> {
    /// Returns the mark placed by this move.
    pub fn mark(&self) -> &M {
        &self.mark
    }

    /// Returns the target cell.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<M: std::fmt::Display> std::fmt::Display for Move<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> cell {}", self.mark, self.index)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The cell does not exist on this board.
    #[display("Cell {} is outside a board of {} cells", index, cells)]
    OutOfBounds {
        /// Requested cell.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// Coordinates outside the board.
    #[display("Row {} column {} is outside a {}x{} board", row, col, rows, cols)]
    OffBoard {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Rows on the board.
        rows: usize,
        /// Columns on the board.
        cols: usize,
    },

    /// The game already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// Tried to jump to a move that was never played.
    #[display("Move #{} does not exist (history has {} moves)", requested, available)]
    UnknownMove {
        /// Requested move number.
        requested: usize,
        /// Number of moves in the history.
        available: usize,
    },
}

impl std::error::Error for MoveError {}
