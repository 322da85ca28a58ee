//! Game status derived from a board snapshot.

use super::board::Board;
use super::evaluate::{WinResult, evaluate_board};
use super::lines::{Line, LineSet};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus<M> {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won {
        /// Winning mark.
        mark: M,
        /// Completed line.
        line: Line,
    },
    /// Board is full with no completed line.
    Draw,
}

impl<M> GameStatus<M> {
    /// Returns true if no further move may be played.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&M> {
        match self {
            GameStatus::Won { mark, .. } => Some(mark),
            _ => None,
        }
    }
}

/// Derives the status of `board`: a completed line first, then a full board.
#[instrument(skip_all)]
pub fn game_status<M: Clone + PartialEq>(board: &Board<M>, lines: &LineSet) -> GameStatus<M> {
    let result = evaluate_board(board.squares(), lines);
    if let WinResult::Winner(line) = &result
        && let Some(mark) = result.winning_mark(board.squares())
    {
        return GameStatus::Won {
            mark: mark.clone(),
            line: line.clone(),
        };
    }

    if board.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
