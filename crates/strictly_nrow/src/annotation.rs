//! Per-cell presentation hints derived from a board and its evaluation.

use super::board::{Board, Square};
use super::evaluate::WinResult;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a front end should present a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum CellAnnotation {
    /// Unplayed cell.
    #[strum(to_string = "empty")]
    Empty,
    /// Held by the player who moves first.
    #[strum(to_string = "first-player")]
    FirstPlayer,
    /// Held by the other player.
    #[strum(to_string = "second-player")]
    SecondPlayer,
    /// Part of the winning line.
    #[strum(to_string = "winner")]
    Winning,
}

/// Annotates every cell of `board`.
///
/// Cells of the winning line are [`CellAnnotation::Winning`] regardless of
/// owner; other cells are attributed by comparing against `first_mark`.
#[instrument(skip_all, fields(cells = board.len(), winner = result.is_winner()))]
pub fn annotate<M: PartialEq>(
    board: &Board<M>,
    result: &WinResult,
    first_mark: &M,
) -> Vec<CellAnnotation> {
    let winning = result.line();
    board
        .squares()
        .iter()
        .enumerate()
        .map(|(index, square)| match square {
            _ if winning.is_some_and(|line| line.contains(index)) => CellAnnotation::Winning,
            Square::Empty => CellAnnotation::Empty,
            Square::Occupied(mark) if mark == first_mark => CellAnnotation::FirstPlayer,
            Square::Occupied(_) => CellAnnotation::SecondPlayer,
        })
        .collect()
}
