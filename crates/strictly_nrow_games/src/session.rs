//! Game session: settings lock, move history and status.
//!
//! The session owns everything the pure core does not: the settings being
//! edited, whether they are locked by a running game, and the history of
//! board snapshots. Lines are enumerated once per started game.

use strictly_nrow::{
    Board, BoardConfig, CellAnnotation, GameSettings, GameStatus, HistoryEntry, HistoryOrder,
    Layout, LineSet, Mark, MoveError, MoveHistory, SettingsDraft, SettingsError, annotate,
    evaluate_board, game_status,
};
use tracing::{debug, info, instrument, warn};

/// Errors surfaced to the player.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// The settings draft was rejected.
    #[display("{}", _0)]
    Settings(SettingsError),

    /// The move was rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// Moves need validated, locked settings.
    #[display("Validate the settings by starting a new game before playing")]
    NotStarted,

    /// Settings cannot change while a game is running.
    #[display("Settings are locked while a game is running; edit the settings first")]
    SettingsLocked,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Settings(e) => Some(e),
            SessionError::Move(e) => Some(e),
            SessionError::NotStarted | SessionError::SettingsLocked => None,
        }
    }
}

impl From<SettingsError> for SessionError {
    fn from(err: SettingsError) -> Self {
        Self::Settings(err)
    }
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        Self::Move(err)
    }
}

/// A game with validated settings.
#[derive(Debug, Clone)]
pub struct ActiveGame {
    settings: GameSettings,
    lines: LineSet,
    history: MoveHistory<Mark>,
}

impl ActiveGame {
    /// Starts a game on an empty board, enumerating its lines once.
    #[instrument(skip_all, fields(config = ?settings.config()))]
    pub fn new(settings: GameSettings) -> Self {
        let lines = settings.config().lines();
        let history = MoveHistory::new(settings.config().cell_count());
        info!(lines = lines.len(), "Game started");
        Self {
            settings,
            lines,
            history,
        }
    }

    /// Settings the game was started with.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Every candidate winning line.
    pub fn lines(&self) -> &LineSet {
        &self.lines
    }

    /// Move history.
    pub fn history(&self) -> &MoveHistory<Mark> {
        &self.history
    }

    /// Board at the current position.
    pub fn board(&self) -> &Board<Mark> {
        self.history.current()
    }

    /// Status of the current position.
    pub fn status(&self) -> GameStatus<Mark> {
        game_status(self.board(), &self.lines)
    }

    /// Mark of the player to move at the current position.
    pub fn to_move(&self) -> &Mark {
        self.settings.mark_for(self.history.first_player_to_move())
    }
}

/// One player's view of the game: settings form plus the board.
#[derive(Debug, Clone)]
pub struct GameSession {
    layout: Layout,
    draft: SettingsDraft,
    locked: bool,
    game: Option<ActiveGame>,
}

impl GameSession {
    /// Creates a session with an editable draft and no game.
    #[instrument(skip(draft))]
    pub fn new(layout: Layout, draft: SettingsDraft) -> Self {
        Self {
            layout,
            draft,
            locked: false,
            game: None,
        }
    }

    /// Layout used for validation.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Settings as currently entered.
    pub fn draft(&self) -> &SettingsDraft {
        &self.draft
    }

    /// Editable settings.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SettingsLocked`] while a game is running.
    pub fn draft_mut(&mut self) -> Result<&mut SettingsDraft, SessionError> {
        if self.locked {
            return Err(SessionError::SettingsLocked);
        }
        Ok(&mut self.draft)
    }

    /// True while a game is running and settings cannot change.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The current game, running or stopped for editing.
    pub fn game(&self) -> Option<&ActiveGame> {
        self.game.as_ref()
    }

    /// Validates the draft, locks it and starts a fresh game.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::SettingsLocked`] if a game is already running
    /// and [`SessionError::Settings`] if the draft is invalid.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<&ActiveGame, SessionError> {
        if self.locked {
            return Err(SessionError::SettingsLocked);
        }
        let settings = self.draft.validate(self.layout)?;
        self.locked = true;
        Ok(self.game.insert(ActiveGame::new(settings)))
    }

    /// Unlocks the settings. The board stays visible but accepts no moves.
    #[instrument(skip(self))]
    pub fn edit(&mut self) {
        if self.locked {
            debug!("Settings unlocked");
        }
        self.locked = false;
    }

    /// Plays the next mark at `index` on the current position.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotStarted`] unless a game is running,
    /// [`MoveError::GameOver`] once the position is decided and the
    /// board's error for a taken or missing cell.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus<Mark>, SessionError> {
        let game = match (&mut self.game, self.locked) {
            (Some(game), true) => game,
            _ => {
                warn!("Move attempted without a running game");
                return Err(SessionError::NotStarted);
            }
        };

        if game.status().is_over() {
            return Err(MoveError::GameOver.into());
        }

        let mark = game.to_move().clone();
        game.history.play(index, mark.clone())?;
        let status = game.status();
        info!(%mark, index, move_number = game.history.current_move(), "Move played");
        if let GameStatus::Won { line, .. } = &status {
            info!(%mark, %line, "Game won");
        }
        Ok(status)
    }

    /// Plays at `(row, col)`.
    ///
    /// # Errors
    ///
    /// As [`GameSession::play`], plus [`MoveError::OffBoard`] for
    /// coordinates off the board.
    #[instrument(skip(self))]
    pub fn play_at(&mut self, row: usize, col: usize) -> Result<GameStatus<Mark>, SessionError> {
        let config = self.config().ok_or(SessionError::NotStarted)?;
        let index = config.index_of(row, col).ok_or(MoveError::OffBoard {
            row,
            col,
            rows: config.rows(),
            cols: config.cols(),
        })?;
        self.play(index)
    }

    /// Shows the position after `move_number` marks.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotStarted`] before the first game and
    /// [`MoveError::UnknownMove`] past the latest move.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NotStarted)?;
        game.history.jump_to(move_number)?;
        Ok(())
    }

    /// Shows the empty board.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotStarted`] before the first game.
    #[instrument(skip(self))]
    pub fn jump_to_start(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NotStarted)?;
        game.history.jump_to_start();
        Ok(())
    }

    /// Flips the history listing order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotStarted`] before the first game.
    pub fn toggle_history_order(&mut self) -> Result<HistoryOrder, SessionError> {
        let game = self.game.as_mut().ok_or(SessionError::NotStarted)?;
        Ok(game.history.toggle_order())
    }

    /// History entries in the listing order; empty before the first game.
    pub fn history_entries(&self) -> Vec<HistoryEntry> {
        self.game
            .as_ref()
            .map(|g| g.history.entries())
            .unwrap_or_default()
    }

    /// Board configuration of the current game.
    pub fn config(&self) -> Option<BoardConfig> {
        self.game.as_ref().map(|g| *g.settings.config())
    }

    /// Status of the current position, if a game exists.
    pub fn status(&self) -> Option<GameStatus<Mark>> {
        self.game.as_ref().map(ActiveGame::status)
    }

    /// Presentation hint for every cell of the current position.
    pub fn annotations(&self) -> Vec<CellAnnotation> {
        self.game
            .as_ref()
            .map(|g| {
                let result = evaluate_board(g.board().squares(), &g.lines);
                annotate(g.board(), &result, g.settings.first_player())
            })
            .unwrap_or_default()
    }

    /// One-line status for display.
    pub fn status_line(&self) -> String {
        let Some(game) = &self.game else {
            return "Validate the settings by starting a new game.".to_string();
        };
        match game.status() {
            GameStatus::Won { mark, .. } => {
                format!("Game over and the Winner is : \"{}\"", mark)
            }
            GameStatus::Draw => "Game over: the board is full, it's a draw.".to_string(),
            GameStatus::InProgress if !self.locked => {
                "Settings are being edited. Start a new game to play.".to_string()
            }
            GameStatus::InProgress => {
                format!("The player \"{}\" must play now.", game.to_move())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_draft() -> SettingsDraft {
        SettingsDraft {
            rows: 3,
            cols: 3,
            win_length: 3,
            first_player: "X".to_string(),
            second_player: "O".to_string(),
        }
    }

    fn started() -> GameSession {
        let mut session = GameSession::new(Layout::Desktop, small_draft());
        session.start().unwrap();
        session
    }

    #[test]
    fn test_moves_need_started_game() {
        let mut session = GameSession::new(Layout::Desktop, small_draft());
        assert_eq!(session.play(0), Err(SessionError::NotStarted));
    }

    #[test]
    fn test_start_locks_settings() {
        let mut session = started();
        assert!(session.is_locked());
        assert_eq!(session.draft_mut().err(), Some(SessionError::SettingsLocked));
        assert!(matches!(session.start(), Err(SessionError::SettingsLocked)));
        assert_eq!(session.game().unwrap().lines().len(), 8);
    }

    #[test]
    fn test_invalid_draft_stays_unlocked() {
        let mut session = GameSession::new(Layout::Desktop, small_draft());
        session.draft_mut().unwrap().win_length = 4;
        assert!(matches!(session.start(), Err(SessionError::Settings(_))));
        assert!(!session.is_locked());
    }

    #[test]
    fn test_status_line_follows_turns() {
        let mut session = started();
        assert_eq!(session.status_line(), "The player \"X\" must play now.");
        session.play(4).unwrap();
        assert_eq!(session.status_line(), "The player \"O\" must play now.");
    }

    #[test]
    fn test_win_blocks_further_moves() {
        let mut session = started();
        for index in [0, 3, 1, 4] {
            session.play(index).unwrap();
        }
        let status = session.play(2).unwrap();
        assert_eq!(status.winner(), Some(&Mark::from("X")));
        assert_eq!(
            session.play(8),
            Err(SessionError::Move(MoveError::GameOver))
        );
        assert_eq!(session.status_line(), "Game over and the Winner is : \"X\"");
    }

    #[test]
    fn test_edit_blocks_moves_until_restart() {
        let mut session = started();
        session.play(0).unwrap();
        session.edit();
        assert_eq!(session.play(1), Err(SessionError::NotStarted));
        // The stopped board stays visible.
        assert_eq!(session.game().unwrap().board().occupied_count(), 1);

        session.start().unwrap();
        assert_eq!(session.game().unwrap().board().occupied_count(), 0);
    }

    #[test]
    fn test_jump_back_and_replay_from_there() {
        let mut session = started();
        for index in [0, 4, 8] {
            session.play(index).unwrap();
        }
        session.jump_to(1).unwrap();
        assert_eq!(session.status_line(), "The player \"O\" must play now.");

        session.play(2).unwrap();
        let entries = session.history_entries();
        assert_eq!(entries.len(), 3);
        assert!(entries[2].is_current);
    }

    #[test]
    fn test_play_at_coordinates() {
        let mut session = started();
        session.play_at(2, 1).unwrap();
        assert_eq!(session.annotations()[7], CellAnnotation::FirstPlayer);
        assert!(matches!(
            session.play_at(3, 0),
            Err(SessionError::Move(MoveError::OffBoard { .. }))
        ));
    }
}
