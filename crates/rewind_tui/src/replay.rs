//! Headless replay: play a list of moves and report the result.

use anyhow::{Context, Result};
use rewind_tictactoe::{GameState, PlayResult, SortOrder};
use std::fmt::Write;
use tracing::{info, instrument, warn};

/// Plays `moves` in order, optionally jumps, and returns the game.
///
/// Ignored moves are skipped and logged; they are listed in the report.
#[instrument]
pub fn replay(moves: &[usize], jump: Option<usize>, order: SortOrder) -> Result<Replay> {
    let mut game = GameState::with_order(order);
    let mut ignored = Vec::new();

    for &index in moves {
        match game.play_index(index) {
            PlayResult::Placed { player, coordinate } => {
                info!(index, %player, %coordinate, "Replayed move");
            }
            PlayResult::Ignored(reason) => {
                warn!(index, %reason, "Move ignored");
                ignored.push((index, reason.to_string()));
            }
        }
    }

    if let Some(step) = jump {
        game.jump_to(step).context("Jump after replay failed")?;
    }

    Ok(Replay { game, ignored })
}

/// Result of a replay.
#[derive(Debug, Clone)]
pub struct Replay {
    /// Final state.
    pub game: GameState,
    /// Moves that changed nothing, with the reason.
    pub ignored: Vec<(usize, String)>,
}

impl Replay {
    /// Plain-text report: board, status, ignored moves, move list.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.game.current().board().display());
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.game.status());
        for (index, reason) in &self.ignored {
            let _ = writeln!(out, "Ignored move {}: {}", index, reason);
        }
        let _ = writeln!(out);
        for description in self.game.moves() {
            let marker = if description.is_current { ">" } else { " " };
            let _ = writeln!(out, "{} {}", marker, description);
        }
        out
    }

    /// Full game state as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.game).context("Failed to serialize game state")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Status;

    #[test]
    fn test_replay_reports_winner() {
        let replay = replay(&[0, 1, 4, 2, 8], None, SortOrder::Ascending).unwrap();
        assert_eq!(replay.game.status().to_string(), "Winner: X");
        let report = replay.report();
        assert!(report.starts_with("X|O|O\n-+-+-\n4|X|6\n-+-+-\n7|8|X"));
        assert!(report.contains("> (3, 3) - Go to move #5"));
    }

    #[test]
    fn test_replay_lists_ignored_moves() {
        let replay = replay(&[4, 4, 12], None, SortOrder::Ascending).unwrap();
        assert_eq!(replay.ignored.len(), 2);
        assert_eq!(replay.game.history().len(), 2);
        assert!(replay.report().contains("Ignored move 12"));
    }

    #[test]
    fn test_replay_jump() {
        let replay = replay(&[0, 1, 2], Some(1), SortOrder::Descending).unwrap();
        assert_eq!(replay.game.step_number(), 1);
        assert_eq!(replay.game.status(), Status::NextPlayer(rewind_tictactoe::Player::O));
        assert!(replay.report().contains("> (1, 1) - Go to move #1"));
    }

    #[test]
    fn test_replay_bad_jump_is_error() {
        assert!(replay(&[0], Some(3), SortOrder::Ascending).is_err());
    }

    #[test]
    fn test_json_round_trips() {
        let replay = replay(&[4], None, SortOrder::Ascending).unwrap();
        let json = replay.to_json().unwrap();
        let parsed: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, replay.game);
    }
}
