//! Command-line interface for strictly_nrow.

use clap::{Parser, Subcommand};

/// Strictly N-in-a-row - tic-tac-toe on any board, any run length
#[derive(Parser, Debug)]
#[command(name = "strictly_nrow")]
#[command(about = "Play N-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play {
        /// Number of rows
        #[arg(long)]
        rows: Option<usize>,

        /// Number of columns
        #[arg(long)]
        cols: Option<usize>,

        /// Marks in a row needed to win
        #[arg(long)]
        win: Option<usize>,

        /// First player's name (1 to 3 characters)
        #[arg(long)]
        first: Option<String>,

        /// Second player's name (1 to 3 characters)
        #[arg(long)]
        second: Option<String>,

        /// Use the narrow mobile layout (3 to 5 columns)
        #[arg(long)]
        mobile: bool,

        /// TOML file with default settings
        #[arg(long)]
        settings: Option<std::path::PathBuf>,
    },

    /// List every winning line of a board
    Lines {
        /// Number of rows
        rows: usize,

        /// Number of columns
        cols: usize,

        /// Marks in a row needed to win
        win: usize,

        /// Print the lines as JSON
        #[arg(long)]
        json: bool,
    },
}
