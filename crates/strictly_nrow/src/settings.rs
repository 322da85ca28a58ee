//! Game settings and their validation.
//!
//! A [`SettingsDraft`] is whatever the user typed. [`SettingsDraft::validate`]
//! turns it into immutable [`GameSettings`], the only form the game accepts.

use super::config::BoardConfig;
use super::mark::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use tracing::{debug, info, instrument};

/// Allowed number of rows.
pub const ROWS: RangeInclusive<usize> = 3..=50;
/// Allowed number of columns on a wide screen.
pub const DESKTOP_COLUMNS: RangeInclusive<usize> = 3..=12;
/// Allowed number of columns on a narrow screen.
pub const MOBILE_COLUMNS: RangeInclusive<usize> = 3..=5;
/// Allowed number of aligned marks needed to win.
pub const WIN_LENGTH: RangeInclusive<usize> = 3..=10;
/// Allowed player name length, in characters.
pub const NAME_LENGTH: RangeInclusive<usize> = 1..=3;

/// Screen class the board is laid out for. Narrow screens get fewer columns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Computer or tablet.
    #[default]
    #[strum(to_string = "computer or tablet")]
    Desktop,
    /// Mobile phone.
    #[strum(to_string = "mobile phone")]
    Mobile,
}

impl Layout {
    /// Allowed number of columns for this layout.
    pub fn columns(self) -> RangeInclusive<usize> {
        match self {
            Layout::Desktop => DESKTOP_COLUMNS,
            Layout::Mobile => MOBILE_COLUMNS,
        }
    }

    /// Column count a new draft starts with.
    pub fn default_columns(self) -> usize {
        match self {
            Layout::Desktop => 10,
            Layout::Mobile => 5,
        }
    }
}

/// Which player a name check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Seat {
    /// Player who moves first.
    #[strum(to_string = "first")]
    First,
    /// Player who moves second.
    #[strum(to_string = "second")]
    Second,
}

/// Reason a settings draft was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SettingsError {
    /// Row count outside [`ROWS`].
    #[display("Set a valid number of lines: it must be between {} and {} (got {})", min, max, rows)]
    Rows {
        /// Rejected value.
        rows: usize,
        /// Smallest allowed value.
        min: usize,
        /// Largest allowed value.
        max: usize,
    },

    /// Column count outside the layout's range.
    #[display(
        "Set a valid number of columns: for a {} it must be between {} and {} (got {})",
        layout,
        min,
        max,
        cols
    )]
    Columns {
        /// Rejected value.
        cols: usize,
        /// Layout the range depends on.
        layout: Layout,
        /// Smallest allowed value for the layout.
        min: usize,
        /// Largest allowed value for the layout.
        max: usize,
    },

    /// Win length outside [`WIN_LENGTH`].
    #[display("Set a valid number of squares to line up for a victory: it must be between {} and {} (got {})", min, max, win_length)]
    WinLength {
        /// Rejected value.
        win_length: usize,
        /// Smallest allowed value.
        min: usize,
        /// Largest allowed value.
        max: usize,
    },

    /// Win length longer than a row or a column.
    #[display("The number of squares to line up ({}) cannot exceed the number of lines ({}) or columns ({})", win_length, rows, cols)]
    WinLengthExceedsBoard {
        /// Requested win length.
        win_length: usize,
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Player name length outside [`NAME_LENGTH`].
    #[display("Set a valid name for the {} player: it must be one, two or three characters", seat)]
    PlayerName {
        /// Which player.
        seat: Seat,
    },

    /// Both players picked the same name.
    #[display("The two players must have different names (both are \"{}\")", name)]
    SameNames {
        /// The shared name.
        name: String,
    },
}

impl std::error::Error for SettingsError {}

/// Unvalidated settings, as entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDraft {
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
    /// Number of aligned marks needed to win.
    pub win_length: usize,
    /// Name of the player who moves first.
    pub first_player: String,
    /// Name of the player who moves second.
    pub second_player: String,
}

impl SettingsDraft {
    /// Default draft for a layout: 10 rows, 10 or 5 columns, 5 to win.
    #[instrument]
    pub fn for_layout(layout: Layout) -> Self {
        Self {
            rows: 10,
            cols: layout.default_columns(),
            win_length: 5,
            first_player: "FP".to_string(),
            second_player: "SP".to_string(),
        }
    }

    /// Validates the draft, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// Checks run in order: rows, columns, win length range, win length
    /// against the board, first name, second name, distinct names.
    #[instrument(skip(self), fields(rows = self.rows, cols = self.cols, win_length = self.win_length))]
    pub fn validate(&self, layout: Layout) -> Result<GameSettings, SettingsError> {
        let result = self.check(layout);
        match &result {
            Ok(_) => debug!("Settings accepted"),
            Err(e) => info!(error = %e, "Settings rejected"),
        }
        result
    }

    fn check(&self, layout: Layout) -> Result<GameSettings, SettingsError> {
        if !ROWS.contains(&self.rows) {
            return Err(SettingsError::Rows {
                rows: self.rows,
                min: *ROWS.start(),
                max: *ROWS.end(),
            });
        }
        let columns = layout.columns();
        if !columns.contains(&self.cols) {
            return Err(SettingsError::Columns {
                cols: self.cols,
                layout,
                min: *columns.start(),
                max: *columns.end(),
            });
        }
        if !WIN_LENGTH.contains(&self.win_length) {
            return Err(SettingsError::WinLength {
                win_length: self.win_length,
                min: *WIN_LENGTH.start(),
                max: *WIN_LENGTH.end(),
            });
        }
        if self.win_length > self.rows || self.win_length > self.cols {
            return Err(SettingsError::WinLengthExceedsBoard {
                win_length: self.win_length,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let first_player = Mark::new(self.first_player.trim());
        let second_player = Mark::new(self.second_player.trim());
        if !NAME_LENGTH.contains(&first_player.char_count()) {
            return Err(SettingsError::PlayerName { seat: Seat::First });
        }
        if !NAME_LENGTH.contains(&second_player.char_count()) {
            return Err(SettingsError::PlayerName { seat: Seat::Second });
        }
        if first_player == second_player {
            return Err(SettingsError::SameNames {
                name: first_player.to_string(),
            });
        }

        Ok(GameSettings {
            config: BoardConfig::new(self.rows, self.cols, self.win_length),
            first_player,
            second_player,
            layout,
        })
    }
}

impl Default for SettingsDraft {
    fn default() -> Self {
        Self::for_layout(Layout::default())
    }
}

impl From<&GameSettings> for SettingsDraft {
    fn from(settings: &GameSettings) -> Self {
        Self {
            rows: settings.config.rows(),
            cols: settings.config.cols(),
            win_length: settings.config.win_length(),
            first_player: settings.first_player.to_string(),
            second_player: settings.second_player.to_string(),
        }
    }
}

/// Validated settings, fixed for the length of a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameSettings {
    /// Board dimensions and win length.
    config: BoardConfig,
    /// Mark of the player who moves first.
    first_player: Mark,
    /// Mark of the player who moves second.
    second_player: Mark,
    /// Layout the settings were validated for.
    layout: Layout,
}

impl GameSettings {
    /// Mark of the player to move, given who is next.
    pub fn mark_for(&self, first_to_move: bool) -> &Mark {
        if first_to_move {
            &self.first_player
        } else {
            &self.second_player
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(rows: usize, cols: usize, win_length: usize) -> SettingsDraft {
        SettingsDraft {
            rows,
            cols,
            win_length,
            ..SettingsDraft::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = SettingsDraft::default().validate(Layout::Desktop).unwrap();
        assert_eq!(*settings.config(), BoardConfig::new(10, 10, 5));
        assert_eq!(settings.first_player().as_str(), "FP");

        let mobile = SettingsDraft::for_layout(Layout::Mobile)
            .validate(Layout::Mobile)
            .unwrap();
        assert_eq!(mobile.config().cols(), 5);
    }

    #[test]
    fn test_row_range() {
        assert_eq!(
            draft(2, 5, 3).validate(Layout::Desktop),
            Err(SettingsError::Rows {
                rows: 2,
                min: 3,
                max: 50
            })
        );
        assert_eq!(
            draft(51, 5, 3).validate(Layout::Desktop),
            Err(SettingsError::Rows {
                rows: 51,
                min: 3,
                max: 50
            })
        );
        assert!(draft(50, 5, 3).validate(Layout::Desktop).is_ok());
    }

    #[test]
    fn test_columns_depend_on_layout() {
        assert!(draft(10, 12, 5).validate(Layout::Desktop).is_ok());
        assert_eq!(
            draft(10, 6, 5).validate(Layout::Mobile),
            Err(SettingsError::Columns {
                cols: 6,
                layout: Layout::Mobile,
                min: 3,
                max: 5
            })
        );
        assert!(draft(10, 13, 5).validate(Layout::Desktop).is_err());
    }

    #[test]
    fn test_win_length_range_checked_before_board_fit() {
        assert_eq!(
            draft(10, 10, 11).validate(Layout::Desktop),
            Err(SettingsError::WinLength {
                win_length: 11,
                min: 3,
                max: 10
            })
        );
        assert_eq!(
            draft(10, 4, 5).validate(Layout::Desktop),
            Err(SettingsError::WinLengthExceedsBoard {
                win_length: 5,
                rows: 10,
                cols: 4
            })
        );
    }

    #[test]
    fn test_player_names() {
        let mut d = SettingsDraft::default();
        d.first_player = String::new();
        assert_eq!(
            d.validate(Layout::Desktop),
            Err(SettingsError::PlayerName { seat: Seat::First })
        );

        let mut d = SettingsDraft::default();
        d.second_player = "ABCD".to_string();
        assert_eq!(
            d.validate(Layout::Desktop),
            Err(SettingsError::PlayerName { seat: Seat::Second })
        );

        let mut d = SettingsDraft::default();
        d.second_player = "FP".to_string();
        assert!(matches!(
            d.validate(Layout::Desktop),
            Err(SettingsError::SameNames { .. })
        ));
    }

    #[test]
    fn test_names_count_characters_not_bytes() {
        let mut d = SettingsDraft::default();
        d.first_player = "été".to_string();
        assert!(d.validate(Layout::Desktop).is_ok());
    }

    #[test]
    fn test_error_message_names_the_layout() {
        let err = draft(10, 6, 5).validate(Layout::Mobile).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Set a valid number of columns: for a mobile phone it must be between 3 and 5 (got 6)"
        );
    }

    #[test]
    fn test_mark_for() {
        let settings = SettingsDraft::default().validate(Layout::Desktop).unwrap();
        assert_eq!(settings.mark_for(true).as_str(), "FP");
        assert_eq!(settings.mark_for(false).as_str(), "SP");
    }
}
