//! Plain-text board rendering.

use strictly_nrow::{Board, BoardConfig, CellAnnotation, Mark, Square};
use tracing::instrument;

/// Renders the board as a grid with row and column numbers.
///
/// Winning cells are bracketed. Cells missing from `annotations` render
/// as ordinary cells.
#[instrument(skip_all, fields(rows = config.rows(), cols = config.cols()))]
pub fn render_board(
    config: &BoardConfig,
    board: &Board<Mark>,
    annotations: &[CellAnnotation],
) -> String {
    let mut out = String::from("    ");
    for col in 0..config.cols() {
        out.push_str(&format!("{:^5}", col));
    }
    out.push('\n');

    for row in 0..config.rows() {
        out.push_str(&format!("{:>3} ", row));
        for col in 0..config.cols() {
            let index = row * config.cols() + col;
            let winning = annotations.get(index) == Some(&CellAnnotation::Winning);
            let cell = match board.get(index) {
                Some(Square::Occupied(mark)) if winning => format!("[{:^3}]", mark.as_str()),
                Some(Square::Occupied(mark)) => format!(" {:^3} ", mark.as_str()),
                _ => "  .  ".to_string(),
            };
            out.push_str(&cell);
        }
        out.push('\n');
    }
    out
}

/// Renders history entries one per line, the current one flagged.
pub fn render_history(entries: &[strictly_nrow::HistoryEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { ">" } else { " " };
            match entry.cell {
                Some(cell) => format!("{} {} (cell {})\n", marker, entry, cell),
                None => format!("{} {}\n", marker, entry),
            }
        })
        .collect()
}
