//! Immutable board snapshots.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square<M> {
    /// Unplayed cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(M),
}

impl<M> Square<M> {
    /// Returns the mark in this cell, if any.
    pub fn mark(&self) -> Option<&M> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Returns true for an unplayed cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Square::Empty)
    }
}

/// Board snapshot: `rows * cols` squares in row-major order.
///
/// Snapshots are never changed in place. Placing a mark produces a new
/// board so earlier positions stay available to the move history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<M> {
    squares: Vec<Square<M>>,
}

impl<M: Clone> Board<M> {
    /// Creates an empty board with `cells` squares.
    #[instrument]
    pub fn new(cells: usize) -> Self {
        Self {
            squares: vec![Square::Empty; cells],
        }
    }

    /// Returns a new snapshot with `mark` placed at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] for a cell off the board and
    /// [`MoveError::SquareOccupied`] for a cell already played.
    #[instrument(skip(self, mark))]
    pub fn with_mark(&self, index: usize, mark: M) -> Result<Self, MoveError> {
        match self.squares.get(index) {
            None => Err(MoveError::OutOfBounds {
                index,
                cells: self.squares.len(),
            }),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            Some(Square::Empty) => {
                let mut squares = self.squares.clone();
                squares[index] = Square::Occupied(mark);
                Ok(Self { squares })
            }
        }
    }
}

impl<M> Board<M> {
    /// Gets the square at `index`.
    pub fn get(&self, index: usize) -> Option<&Square<M>> {
        self.squares.get(index)
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square<M>] {
        &self.squares
    }

    /// Number of squares.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Returns true for a board without squares.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Checks if the board is full (all squares occupied).
    ///
    /// A full board with no winner indicates a draw.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Indices of the empty squares.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| i)
            .collect()
    }
}

impl<M> From<Vec<Square<M>>> for Board<M> {
    fn from(squares: Vec<Square<M>>) -> Self {
        Self { squares }
    }
}
