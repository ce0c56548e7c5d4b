//! Rewind Tic-Tac-Toe - Unified CLI

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, Command, Settings, logging, replay, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let settings = Settings::load_or_default(&cli.config)?
        .with_overrides(cli.descending, cli.log_file.clone());

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file(settings.log_file(), settings.log_filter())?;
            run_tui(&settings)
        }
        Command::Replay { moves, jump, json } => {
            logging::init_stderr(settings.log_filter());
            run_replay(&settings, &moves, jump, json)
        }
    }
}

/// Replay moves and print the result to stdout.
#[instrument(skip(settings))]
fn run_replay(settings: &Settings, moves: &[usize], jump: Option<usize>, json: bool) -> Result<()> {
    info!("Replaying moves");
    let replay = replay(moves, jump, settings.order())?;
    if json {
        println!("{}", replay.to_json()?);
    } else {
        print!("{}", replay.report());
    }
    Ok(())
}
