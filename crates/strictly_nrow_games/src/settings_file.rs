//! Settings loaded from a TOML file.
//!
//! Every field is optional; missing fields leave the draft untouched.
//!
//! ```toml
//! rows = 15
//! cols = 12
//! win_length = 5
//! first_player = "X"
//! second_player = "O"
//! layout = "desktop"
//! ```

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_nrow::{Layout, SettingsDraft};
use tracing::{debug, info, instrument};

/// Partial settings read from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    /// Number of rows.
    rows: Option<usize>,
    /// Number of columns.
    cols: Option<usize>,
    /// Number of aligned marks needed to win.
    win_length: Option<usize>,
    /// Name of the player who moves first.
    first_player: Option<String>,
    /// Name of the player who moves second.
    second_player: Option<String>,
    /// Screen class used for column limits.
    layout: Option<Layout>,
}

impl SettingsFile {
    /// Loads settings from a TOML file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let file: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(?file, "Settings file loaded");
        Ok(file)
    }

    /// Overwrites the draft fields this file sets.
    #[instrument(skip_all)]
    pub fn apply(&self, draft: &mut SettingsDraft) {
        if let Some(rows) = self.rows {
            draft.rows = rows;
        }
        if let Some(cols) = self.cols {
            draft.cols = cols;
        }
        if let Some(win_length) = self.win_length {
            draft.win_length = win_length;
        }
        if let Some(name) = &self.first_player {
            draft.first_player = name.clone();
        }
        if let Some(name) = &self.second_player {
            draft.second_player = name.clone();
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
