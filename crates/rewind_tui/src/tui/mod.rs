//! Terminal UI for Rewind Tic-Tac-Toe.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tictactoe::GameState;
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

use crate::config::Settings;

pub use app::{App, Focus};
pub use input::{Intent, intent_for, move_cursor};

/// Run the TUI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip_all)]
pub fn run_tui(settings: &Settings) -> Result<()> {
    info!("Starting Rewind Tic-Tac-Toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(GameState::with_order(settings.order()));
    let res = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().history().len() - 1, "TUI exited");

    res
}

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// A named cleanup step.
type Step<T> = (&'static str, fn(&mut T) -> io::Result<()>);

const RESTORE_STEPS: [Step<CrosstermTerminal>; 3] = [
    ("disable raw mode", |_| disable_raw_mode()),
    ("leave alternate screen", |t| {
        execute!(t.backend_mut(), LeaveAlternateScreen)
    }),
    ("show cursor", |t| t.show_cursor()),
];

/// Puts the terminal back the way the shell expects it.
fn restore_terminal(terminal: &mut CrosstermTerminal) {
    run_all(terminal, &RESTORE_STEPS);
}

/// Runs every step even if an earlier one fails; returns the failure count.
fn run_all<T>(target: &mut T, steps: &[Step<T>]) -> usize {
    let mut failed = 0;
    for (name, step) in steps {
        if let Err(e) = step(target) {
            warn!(step = *name, error = %e, "Terminal restore step failed");
            failed += 1;
        }
    }
    failed
}

/// Draw, wait for one event, apply it, repeat.
fn run_app(terminal: &mut CrosstermTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_steps_run_after_failure() {
        let steps: [Step<Vec<&'static str>>; 3] = [
            ("first", |log| {
                log.push("first");
                Err(io::Error::other("no tty"))
            }),
            ("second", |log| {
                log.push("second");
                Ok(())
            }),
            ("third", |log| {
                log.push("third");
                Err(io::Error::other("closed"))
            }),
        ];
        let mut log = Vec::new();
        assert_eq!(run_all(&mut log, &steps), 2);
        assert_eq!(log, vec!["first", "second", "third"]);
    }
}
