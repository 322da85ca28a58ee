//! Line well-formedness invariants.
//!
//! Flat row-major indexing makes it easy to produce a run that leaves the
//! board or wraps from the end of one row into the next. These invariants
//! reject such lines before they reach evaluation.

use super::Invariant;
use crate::{BoardConfig, Line};

/// A line together with the board it was generated for.
#[derive(Debug, Clone, Copy)]
pub struct LineInBoard<'a> {
    /// Line under check.
    pub line: &'a Line,
    /// Board the line must fit.
    pub config: BoardConfig,
}

impl<'a> LineInBoard<'a> {
    /// Pairs a line with its board.
    pub fn new(line: &'a Line, config: BoardConfig) -> Self {
        Self { line, config }
    }
}

/// Invariant: a line has exactly `win_length` cells.
pub struct ExactLengthInvariant;

impl Invariant<LineInBoard<'_>> for ExactLengthInvariant {
    fn holds(state: &LineInBoard<'_>) -> bool {
        state.line.len() == state.config.win_length()
    }

    fn description() -> &'static str {
        "Line length equals win length"
    }
}

/// Invariant: every cell index lies on the board.
pub struct InBoundsInvariant;

impl Invariant<LineInBoard<'_>> for InBoundsInvariant {
    fn holds(state: &LineInBoard<'_>) -> bool {
        let count = state.config.cell_count();
        state.line.cells().iter().all(|&cell| cell < count)
    }

    fn description() -> &'static str {
        "Line cells lie on the board"
    }
}

/// Invariant: consecutive cells differ by the direction's step.
pub struct ConstantStepInvariant;

impl Invariant<LineInBoard<'_>> for ConstantStepInvariant {
    fn holds(state: &LineInBoard<'_>) -> bool {
        let step = state.line.direction().step(state.config.cols());
        state
            .line
            .cells()
            .windows(2)
            .all(|pair| pair[1].checked_sub(pair[0]) == Some(step))
    }

    fn description() -> &'static str {
        "Line cells are evenly spaced along its direction"
    }
}

/// Invariant: the line never wraps across a row boundary.
///
/// Each step must move by the direction's row and column offsets, measured
/// in board coordinates rather than flat indices.
pub struct NoWraparoundInvariant;

impl Invariant<LineInBoard<'_>> for NoWraparoundInvariant {
    fn holds(state: &LineInBoard<'_>) -> bool {
        let config = state.config;
        let (row_delta, col_delta) = state.line.direction().delta();
        state.line.cells().windows(2).all(|pair| {
            let (from, to) = (pair[0], pair[1]);
            let rows_ok = config.row_of(to) == config.row_of(from) + row_delta;
            let cols_ok = config.col_of(to) as isize == config.col_of(from) as isize + col_delta;
            rows_ok && cols_ok
        })
    }

    fn description() -> &'static str {
        "Line does not wrap across rows"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn test_horizontal_wraparound_detected() {
        let config = BoardConfig::new(3, 4, 3);
        // 2, 3 end row 0; 4 starts row 1.
        let line = Line::new(Direction::Horizontal, vec![2, 3, 4]);
        let check = LineInBoard::new(&line, config);
        assert!(ConstantStepInvariant::holds(&check));
        assert!(!NoWraparoundInvariant::holds(&check));
    }

    #[test]
    fn test_diagonal_wraparound_detected() {
        let config = BoardConfig::new(4, 4, 3);
        // 3 -> 8 jumps from the last column to the first.
        let line = Line::new(Direction::DiagonalDown, vec![3, 8, 13]);
        let check = LineInBoard::new(&line, config);
        assert!(ConstantStepInvariant::holds(&check));
        assert!(!NoWraparoundInvariant::holds(&check));
    }

    #[test]
    fn test_anti_diagonal_wraparound_detected() {
        let config = BoardConfig::new(4, 4, 3);
        // 4 is column 0; 7 is column 3 of the next row.
        let line = Line::new(Direction::AntiDiagonal, vec![4, 7, 10]);
        let check = LineInBoard::new(&line, config);
        assert!(!NoWraparoundInvariant::holds(&check));
    }

    #[test]
    fn test_out_of_bounds_detected() {
        let config = BoardConfig::new(3, 3, 3);
        let line = Line::new(Direction::Vertical, vec![6, 9, 12]);
        assert!(!InBoundsInvariant::holds(&LineInBoard::new(&line, config)));
    }

    #[test]
    fn test_wrong_step_detected() {
        let config = BoardConfig::new(3, 3, 3);
        let line = Line::new(Direction::Vertical, vec![0, 1, 2]);
        assert!(!ConstantStepInvariant::holds(&LineInBoard::new(&line, config)));
    }

    #[test]
    fn test_vertical_line_holds() {
        let config = BoardConfig::new(5, 2, 4);
        let line = Line::from_start(&config, Direction::Vertical, 1, 1);
        assert_eq!(line.cells(), &[3, 5, 7, 9]);
        let check = LineInBoard::new(&line, config);
        assert!(ExactLengthInvariant::holds(&check));
        assert!(InBoundsInvariant::holds(&check));
        assert!(ConstantStepInvariant::holds(&check));
        assert!(NoWraparoundInvariant::holds(&check));
    }
}
