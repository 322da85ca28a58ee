//! Move history with time travel.
//!
//! Every move appends a new board snapshot. Jumping back keeps the later
//! snapshots until a new move is played from the earlier position, which
//! discards them.

use super::action::{Move, MoveError};
use super::board::Board;
use super::invariants::{HistoryInvariants, InvariantSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Order in which history entries are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryOrder {
    /// Oldest first.
    #[default]
    Ascending,
    /// Newest first.
    Descending,
}

impl HistoryOrder {
    /// Flips the order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One listed position in the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Number of marks placed at this position; 0 is the empty board.
    pub move_number: usize,
    /// Whether this is the position currently shown.
    pub is_current: bool,
    /// Cell played to reach this position.
    pub cell: Option<usize>,
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.is_current, self.move_number) {
            (true, 0) => write!(f, "You are at game start"),
            (false, 0) => write!(f, "Go to game start"),
            (true, n) => write!(f, "You are at move #{}", n),
            (false, n) => write!(f, "Go to move #{}", n),
        }
    }
}

/// Snapshots of one game, from the empty board to the latest move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory<M> {
    pub(crate) snapshots: Vec<Board<M>>,
    pub(crate) moves: Vec<Move<M>>,
    current: usize,
    order: HistoryOrder,
}

impl<M: Clone + PartialEq + std::fmt::Debug> MoveHistory<M> {
    /// Starts a history at an empty board of `cells` squares.
    #[instrument]
    pub fn new(cells: usize) -> Self {
        Self {
            snapshots: vec![Board::new(cells)],
            moves: Vec::new(),
            current: 0,
            order: HistoryOrder::default(),
        }
    }

    /// Plays `mark` at `index` from the current position.
    ///
    /// Any snapshots after the current position are discarded first.
    ///
    /// # Errors
    ///
    /// Returns the board's [`MoveError`] when the cell is off the board or taken.
    #[instrument(skip(self), fields(current = self.current, total = self.snapshots.len()))]
    pub fn play(&mut self, index: usize, mark: M) -> Result<&Board<M>, MoveError> {
        let next = self.current().with_mark(index, mark.clone())?;

        let dropped = self.snapshots.len() - (self.current + 1);
        if dropped > 0 {
            debug!(dropped, "Discarding positions after the current move");
        }
        self.snapshots.truncate(self.current + 1);
        self.moves.truncate(self.current);

        self.snapshots.push(next);
        self.moves.push(Move::new(mark, index));
        self.current += 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated"
        );

        Ok(self.current())
    }
}

impl<M> MoveHistory<M> {
    /// Board at the current position.
    pub fn current(&self) -> &Board<M> {
        &self.snapshots[self.current]
    }

    /// Number of marks placed at the current position.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of the latest recorded move.
    pub fn last_move(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// True when the first player is to move at the current position.
    pub fn first_player_to_move(&self) -> bool {
        self.current % 2 == 0
    }

    /// Moves played up to the latest position.
    pub fn moves(&self) -> &[Move<M>] {
        &self.moves
    }

    /// Board after `move_number` marks, if recorded.
    pub fn snapshot(&self, move_number: usize) -> Option<&Board<M>> {
        self.snapshots.get(move_number)
    }

    /// Shows the position after `move_number` marks.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::UnknownMove`] past the latest recorded move.
    #[instrument(skip(self), fields(last = self.last_move()))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), MoveError> {
        if move_number >= self.snapshots.len() {
            return Err(MoveError::UnknownMove {
                requested: move_number,
                available: self.last_move(),
            });
        }
        self.current = move_number;
        Ok(())
    }

    /// Shows the empty board.
    #[instrument(skip(self))]
    pub fn jump_to_start(&mut self) {
        self.current = 0;
    }

    /// Current listing order.
    pub fn order(&self) -> HistoryOrder {
        self.order
    }

    /// Flips the listing order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) -> HistoryOrder {
        self.order = self.order.toggle();
        self.order
    }

    /// Every recorded position, in the listing order.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let entries = (0..self.snapshots.len()).map(|n| HistoryEntry {
            move_number: n,
            is_current: n == self.current,
            cell: n
                .checked_sub(1)
                .and_then(|i| self.moves.get(i))
                .map(Move::index),
        });
        match self.order {
            HistoryOrder::Ascending => entries.collect(),
            HistoryOrder::Descending => entries.rev().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(cells: &[usize]) -> MoveHistory<char> {
        let mut history = MoveHistory::new(9);
        for (i, &cell) in cells.iter().enumerate() {
            let mark = if i % 2 == 0 { 'X' } else { 'O' };
            history.play(cell, mark).unwrap();
        }
        history
    }

    #[test]
    fn test_new_history_starts_empty() {
        let history: MoveHistory<char> = MoveHistory::new(9);
        assert_eq!(history.current_move(), 0);
        assert_eq!(history.current().occupied_count(), 0);
        assert!(history.first_player_to_move());
    }

    #[test]
    fn test_play_alternates_turns() {
        let history = played(&[4, 0]);
        assert_eq!(history.current_move(), 2);
        assert!(history.first_player_to_move());
        assert_eq!(history.moves().len(), 2);
    }

    #[test]
    fn test_jump_back_keeps_future_until_new_move() {
        let mut history = played(&[4, 0, 8]);
        history.jump_to(1).unwrap();
        assert_eq!(history.current().occupied_count(), 1);
        assert_eq!(history.last_move(), 3);
        assert!(!history.first_player_to_move());

        history.play(2, 'O').unwrap();
        assert_eq!(history.last_move(), 2);
        assert_eq!(history.current_move(), 2);
        assert_eq!(history.moves()[1].index, 2);
    }

    #[test]
    fn test_jump_past_end_rejected() {
        let mut history = played(&[4]);
        assert_eq!(
            history.jump_to(2),
            Err(MoveError::UnknownMove {
                requested: 2,
                available: 1
            })
        );
        assert_eq!(history.current_move(), 1);
    }

    #[test]
    fn test_occupied_cell_leaves_history_untouched() {
        let mut history = played(&[4]);
        assert!(matches!(
            history.play(4, 'O'),
            Err(MoveError::SquareOccupied(4))
        ));
        assert_eq!(history.last_move(), 1);
    }

    #[test]
    fn test_entries_follow_order() {
        let mut history = played(&[4, 0]);
        history.jump_to_start();

        let labels: Vec<String> = history.entries().iter().map(|e| e.to_string()).collect();
        assert_eq!(
            labels,
            vec!["You are at game start", "Go to move #1", "Go to move #2"]
        );

        assert_eq!(history.toggle_order(), HistoryOrder::Descending);
        let numbers: Vec<usize> = history.entries().iter().map(|e| e.move_number).collect();
        assert_eq!(numbers, vec![2, 1, 0]);
        assert_eq!(history.entries()[0].cell, Some(0));
    }
}
