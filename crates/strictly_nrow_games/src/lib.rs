//! Playable N-in-a-row game built on [`strictly_nrow`].
//!
//! # Architecture
//!
//! - **Session**: settings lock, move history navigation and status line
//! - **Settings file**: optional TOML defaults for the settings form
//! - **Render**: plain-text board and history
//! - **Terminal**: line-oriented command loop over any reader and writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod render;
mod session;
mod settings_file;
pub mod terminal;

pub use render::{render_board, render_history};
pub use session::{ActiveGame, GameSession, SessionError};
pub use settings_file::{ConfigError, SettingsFile};
