//! Tic-tac-toe with move history and time-travel.
//!
//! Pure game logic, no I/O:
//!
//! - **Evaluator**: [`evaluate`] maps a [`Board`] to an [`Outcome`]
//!   (winner, winning line, draw flag).
//! - **State manager**: [`GameState`] owns the history of board snapshots,
//!   the current step, whose turn it is and the move-list order.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameState, Player, Position};
//!
//! let mut game = GameState::new();
//! for i in [0, 1, 4, 2, 8] {
//!     game.play_index(i);
//! }
//! let outcome = game.outcome();
//! assert_eq!(outcome.winner, Some(Player::X));
//! assert_eq!(
//!     outcome.line,
//!     Some([Position::TopLeft, Position::Center, Position::BottomRight])
//! );
//!
//! // Time-travel back to the start and branch.
//! game.jump_to(0).unwrap();
//! game.play_index(4);
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod history;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use game::{GameState, IgnoreReason, PlayResult, SortOrder};
pub use history::{History, HistoryEntry, HistoryError, InvalidState, MoveDescription};
pub use outcome::{Outcome, Status, evaluate};
pub use position::{Coordinate, Position};
pub use types::{Board, Player, Square};
