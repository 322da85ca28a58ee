//! Move history invariants.

use super::Invariant;
use crate::MoveHistory;

/// Invariant: every snapshot is its predecessor plus the recorded move.
///
/// Once a square is occupied it never changes in later snapshots.
/// This is verified by replaying the moves and comparing.
pub struct MonotonicHistoryInvariant;

impl<M: Clone + PartialEq> Invariant<MoveHistory<M>> for MonotonicHistoryInvariant {
    fn holds(history: &MoveHistory<M>) -> bool {
        history
            .snapshots
            .windows(2)
            .zip(&history.moves)
            .all(|(pair, mov)| {
                let (before, after) = (&pair[0], &pair[1]);
                match before.with_mark(mov.index, mov.mark.clone()) {
                    Ok(replayed) => replayed == *after,
                    Err(_) => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly the recorded move to the previous one"
    }
}

/// Invariant: snapshot `n` has exactly `n` occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
pub struct GrowingHistoryInvariant;

impl<M> Invariant<MoveHistory<M>> for GrowingHistoryInvariant {
    fn holds(history: &MoveHistory<M>) -> bool {
        history.moves.len() + 1 == history.snapshots.len()
            && history
                .snapshots
                .iter()
                .enumerate()
                .all(|(n, board)| board.occupied_count() == n)
    }

    fn description() -> &'static str {
        "Move count matches occupied squares at every position"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Move};

    fn history() -> MoveHistory<char> {
        let mut history = MoveHistory::new(9);
        history.play(4, 'X').unwrap();
        history.play(0, 'O').unwrap();
        history
    }

    #[test]
    fn test_played_history_holds() {
        let history = history();
        assert!(MonotonicHistoryInvariant::holds(&history));
        assert!(GrowingHistoryInvariant::holds(&history));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut history = history();
        history.snapshots[2] = Board::new(9).with_mark(4, 'O').unwrap().with_mark(0, 'O').unwrap();
        assert!(!MonotonicHistoryInvariant::holds(&history));
        assert!(GrowingHistoryInvariant::holds(&history));
    }

    #[test]
    fn test_missing_move_violates() {
        let mut history = history();
        history.moves.push(Move::new('X', 8));
        assert!(!GrowingHistoryInvariant::holds(&history));
    }
}
