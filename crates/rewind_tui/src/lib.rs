//! Rewind Tic-Tac-Toe front end.
//!
//! - **TUI**: play in the terminal, travel back through the move list
//! - **Replay**: headless replay of a move sequence, as text or JSON
//! - **Settings**: optional TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod replay;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use replay::{Replay, replay};
pub use tui::{App, Focus, run_tui};
