//! Pure N-in-a-row game logic.
//!
//! A generalized tic-tac-toe: any board size, any run length needed to win.
//!
//! # Architecture
//!
//! - **Lines**: every run of `win_length` cells (rows, columns, both
//!   diagonals) computed once per [`BoardConfig`]
//! - **Evaluation**: scans a [`Board`] snapshot against a [`LineSet`]
//! - **History**: immutable snapshots with time travel
//! - **Settings**: validation of user-entered dimensions and player names
//!
//! Nothing here performs I/O or keeps global state.
//!
//! # Example
//!
//! ```
//! use strictly_nrow::{Board, WinResult, enumerate_winning_lines, evaluate_board};
//!
//! let lines = enumerate_winning_lines(3, 3, 3);
//! assert_eq!(lines.len(), 8);
//!
//! let board = Board::new(9)
//!     .with_mark(0, "X")
//!     .and_then(|b| b.with_mark(1, "X"))
//!     .and_then(|b| b.with_mark(2, "X"))
//!     .unwrap();
//! let result = evaluate_board(board.squares(), &lines);
//! assert_eq!(result.line().map(|l| l.cells()), Some(&[0, 1, 2][..]));
//! assert_ne!(result, WinResult::NoWinner);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod annotation;
mod board;
mod config;
mod evaluate;
mod history;
pub mod invariants;
mod lines;
mod mark;
pub mod settings;
mod status;

// Crate-level exports - Configuration and lines
pub use config::BoardConfig;
pub use lines::{Direction, Line, LineSet, enumerate_winning_lines};

// Crate-level exports - Board and evaluation
pub use action::{Move, MoveError};
pub use board::{Board, Square};
pub use evaluate::{WinResult, evaluate_board};
pub use status::{GameStatus, game_status};

// Crate-level exports - Collaborator helpers
pub use annotation::{CellAnnotation, annotate};
pub use history::{HistoryEntry, HistoryOrder, MoveHistory};
pub use mark::Mark;
pub use settings::{GameSettings, Layout, SettingsDraft, SettingsError};
