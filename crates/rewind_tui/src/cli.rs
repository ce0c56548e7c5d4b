//! Command-line interface for rewind_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play, then travel back through your moves
#[derive(Parser, Debug)]
#[command(name = "rewind_tui")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file (missing file means defaults)
    #[arg(short, long, default_value = "rewind_tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// List moves latest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay moves without a UI and print the result
    Replay {
        /// Square indices (0-8, row-major) in the order they are played
        #[arg(value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this step after replaying
        #[arg(long)]
        jump: Option<usize>,

        /// Print the full game state as JSON
        #[arg(long)]
        json: bool,
    },
}
