//! Strictly N-in-a-row - terminal game and line inspector.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use strictly_nrow::{Direction, Layout, SettingsDraft, enumerate_winning_lines};
use strictly_nrow_games::{GameSession, SettingsFile, terminal};
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Settings given on the command line.
#[derive(Debug, Default)]
struct PlayArgs {
    rows: Option<usize>,
    cols: Option<usize>,
    win: Option<usize>,
    first: Option<String>,
    second: Option<String>,
    mobile: bool,
    settings: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            rows,
            cols,
            win,
            first,
            second,
            mobile,
            settings,
        } => run_play(PlayArgs {
            rows,
            cols,
            win,
            first,
            second,
            mobile,
            settings,
        }),
        Command::Lines {
            rows,
            cols,
            win,
            json,
        } => run_lines(rows, cols, win, json),
    }
}

/// Builds the settings draft and runs the terminal game.
#[instrument]
fn run_play(args: PlayArgs) -> Result<()> {
    let file = match &args.settings {
        Some(path) => SettingsFile::from_file(path)?,
        None => SettingsFile::default(),
    };

    let layout = match (args.mobile, file.layout()) {
        (true, _) => Layout::Mobile,
        (false, Some(layout)) => *layout,
        (false, None) => Layout::default(),
    };

    let mut draft = SettingsDraft::for_layout(layout);
    file.apply(&mut draft);
    if let Some(rows) = args.rows {
        draft.rows = rows;
    }
    if let Some(cols) = args.cols {
        draft.cols = cols;
    }
    if let Some(win) = args.win {
        draft.win_length = win;
    }
    if let Some(first) = args.first {
        draft.first_player = first;
    }
    if let Some(second) = args.second {
        draft.second_player = second;
    }

    let mut session = GameSession::new(layout, draft);
    if let Err(e) = session.start() {
        println!("Error: {}", e);
    }

    info!(%layout, "Starting terminal game");
    let stdin = std::io::stdin();
    terminal::run(&mut session, stdin.lock(), std::io::stdout())?;
    Ok(())
}

/// Prints every winning line of a board.
#[instrument]
fn run_lines(rows: usize, cols: usize, win: usize, json: bool) -> Result<()> {
    let lines = enumerate_winning_lines(rows, cols, win);

    if json {
        println!("{}", serde_json::to_string_pretty(&lines)?);
        return Ok(());
    }

    println!(
        "{}x{} board, {} in a row: {} lines",
        rows,
        cols,
        win,
        lines.len()
    );
    for direction in Direction::iter() {
        println!("{} ({})", direction, lines.count_in(direction));
        for line in lines.iter().filter(|l| l.direction() == direction) {
            println!("  {}", line);
        }
    }
    Ok(())
}
