//! Line-oriented terminal front end.
//!
//! Reads one command per line and prints the board and status after each
//! action. Rejected commands print an error and the loop carries on.

use crate::render::{render_board, render_history};
use crate::session::GameSession;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <row> <col>        play the next mark (0-based)
  jump <n>           show the position after move n
  back               show the empty board
  sort               flip the history order
  history            list the moves
  board              show the board
  set <key> <value>  change a setting (rows, cols, win, first, second)
  edit               stop the game and unlock the settings
  new                validate the settings and start a new game
  help               show this help
  quit               leave
";

/// Setting changed by `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
pub enum SettingKey {
    /// Number of rows.
    #[strum(serialize = "rows")]
    Rows,
    /// Number of columns.
    #[strum(serialize = "cols")]
    Cols,
    /// Marks in a row needed to win.
    #[strum(serialize = "win")]
    WinLength,
    /// First player's name.
    #[strum(serialize = "first")]
    FirstPlayer,
    /// Second player's name.
    #[strum(serialize = "second")]
    SecondPlayer,
}

/// A parsed terminal command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play at a row and column.
    Play {
        /// Row, from 0.
        row: usize,
        /// Column, from 0.
        col: usize,
    },
    /// Show the position after this many moves.
    Jump(usize),
    /// Show the empty board.
    Back,
    /// Flip the history order.
    Sort,
    /// List the history.
    History,
    /// Show the board.
    Board,
    /// Change a setting.
    Set {
        /// Setting to change.
        key: SettingKey,
        /// New value, unparsed.
        value: String,
    },
    /// Unlock the settings.
    Edit,
    /// Start a new game.
    New,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Reason a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CommandError {
    /// Nothing but whitespace.
    #[display("Empty command")]
    Empty,

    /// First word is not a command.
    #[display("Unknown command \"{}\"; type help for the list", _0)]
    Unknown(String),

    /// A number was expected.
    #[display("Expected a number, got \"{}\"", _0)]
    NotANumber(String),

    /// Wrong arguments for a known command.
    #[display("Usage: {}", _0)]
    Usage(&'static str),

    /// `set` with an unknown key.
    #[display("Unknown setting \"{}\"; use rows, cols, win, first or second", _0)]
    UnknownSetting(String),
}

impl std::error::Error for CommandError {}

fn number(word: &str) -> Result<usize, CommandError> {
    word.parse()
        .map_err(|_| CommandError::NotANumber(word.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&first, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };

        if first.chars().all(|c| c.is_ascii_digit()) {
            return match rest {
                [col] => Ok(Command::Play {
                    row: number(first)?,
                    col: number(col)?,
                }),
                _ => Err(CommandError::Usage("<row> <col>")),
            };
        }

        let bare = |command: Command, usage: &'static str| {
            if rest.is_empty() {
                Ok(command)
            } else {
                Err(CommandError::Usage(usage))
            }
        };

        match first.to_ascii_lowercase().as_str() {
            "jump" => match rest {
                [n] => Ok(Command::Jump(number(n)?)),
                _ => Err(CommandError::Usage("jump <n>")),
            },
            "set" => match rest {
                [key, value @ ..] if !value.is_empty() => Ok(Command::Set {
                    key: key
                        .parse()
                        .map_err(|_| CommandError::UnknownSetting(key.to_string()))?,
                    value: value.join(" "),
                }),
                _ => Err(CommandError::Usage("set <key> <value>")),
            },
            "back" => bare(Command::Back, "back"),
            "sort" => bare(Command::Sort, "sort"),
            "history" => bare(Command::History, "history"),
            "board" => bare(Command::Board, "board"),
            "edit" => bare(Command::Edit, "edit"),
            "new" => bare(Command::New, "new"),
            "help" => bare(Command::Help, "help"),
            "quit" | "exit" => bare(Command::Quit, "quit"),
            _ => Err(CommandError::Unknown(first.to_string())),
        }
    }
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Runs the command loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    write_board(session, &mut output)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let flow = match line.parse::<Command>() {
            Ok(command) => {
                debug!(?command, "Command parsed");
                execute(session, command, &mut output)?
            }
            Err(e) => {
                writeln!(output, "Error: {}", e)?;
                Flow::Continue
            }
        };
        if flow == Flow::Quit {
            break;
        }
    }
    output.flush()
}

fn execute<W: Write>(
    session: &mut GameSession,
    command: Command,
    output: &mut W,
) -> std::io::Result<Flow> {
    let result = match command {
        Command::Play { row, col } => session.play_at(row, col).map(|_| ()),
        Command::Jump(n) => session.jump_to(n),
        Command::Back => session.jump_to_start(),
        Command::Sort => session.toggle_history_order().map(|_| ()),
        Command::Set { key, ref value } => apply_setting(session, key, value),
        Command::Edit => {
            session.edit();
            Ok(())
        }
        Command::New => session.start().map(|_| ()),
        Command::History | Command::Board => Ok(()),
        Command::Help => {
            write!(output, "{}", HELP)?;
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    };

    if let Err(e) = result {
        writeln!(output, "Error: {}", e)?;
        return Ok(Flow::Continue);
    }

    match command {
        Command::Sort | Command::History => {
            write!(output, "{}", render_history(&session.history_entries()))?
        }
        Command::Set { .. } => write_draft(session, output)?,
        _ => write_board(session, output)?,
    }
    Ok(Flow::Continue)
}

fn apply_setting(
    session: &mut GameSession,
    key: SettingKey,
    value: &str,
) -> Result<(), crate::session::SessionError> {
    let draft = session.draft_mut()?;
    let parsed = || value.parse::<usize>().ok();
    match key {
        SettingKey::Rows => draft.rows = parsed().unwrap_or(0),
        SettingKey::Cols => draft.cols = parsed().unwrap_or(0),
        SettingKey::WinLength => draft.win_length = parsed().unwrap_or(0),
        SettingKey::FirstPlayer => draft.first_player = value.to_string(),
        SettingKey::SecondPlayer => draft.second_player = value.to_string(),
    }
    Ok(())
}

fn write_draft<W: Write>(session: &GameSession, output: &mut W) -> std::io::Result<()> {
    let draft = session.draft();
    writeln!(
        output,
        "Settings: {} rows, {} columns, {} to win, \"{}\" against \"{}\" ({})",
        draft.rows,
        draft.cols,
        draft.win_length,
        draft.first_player,
        draft.second_player,
        session.layout()
    )
}

fn write_board<W: Write>(session: &GameSession, output: &mut W) -> std::io::Result<()> {
    if let (Some(config), Some(game)) = (session.config(), session.game()) {
        write!(
            output,
            "{}",
            render_board(&config, game.board(), &session.annotations())
        )?;
    }
    writeln!(output, "{}", session.status_line())
}
