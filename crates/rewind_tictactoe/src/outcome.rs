//! Outcome evaluation and the status line derived from it.

use crate::rules::{check_winner, is_draw};
use crate::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a single board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Outcome {
    /// Winner, if any line is complete.
    pub winner: Option<Player>,
    /// The winning line, present exactly when `winner` is.
    pub line: Option<[Position; 3]>,
    /// True only when there is no winner and every square is occupied.
    pub draw: bool,
}

impl Outcome {
    /// Whether the game on this board is decided.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.draw
    }

    /// Whether `pos` belongs to the winning line.
    pub fn is_winning_square(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }
}

/// Evaluates a board: first complete line wins, else full board draws.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    match check_winner(board) {
        Some((winner, line)) => Outcome {
            winner: Some(winner),
            line: Some(line),
            draw: false,
        },
        None => Outcome {
            winner: None,
            line: None,
            draw: is_draw(board),
        },
    }
}

/// The one-line status shown above the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A player completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

impl Status {
    /// Derives the status from an outcome and the player to move.
    pub fn new(outcome: &Outcome, next: Player) -> Self {
        match (outcome.winner, outcome.draw) {
            (Some(winner), _) => Status::Winner(winner),
            (None, true) => Status::Draw,
            (None, false) => Status::NextPlayer(next),
        }
    }
}
