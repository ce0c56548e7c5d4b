//! Game state manager: history, step pointer, turn and display order.
//!
//! [`GameState`] is the single owner of all mutable game data. Every user
//! intent maps to one method here:
//!
//! - [`GameState::play_move`] branches forward, discarding any future
//!   entries past the current step.
//! - [`GameState::jump_to`] moves the step pointer without touching history.
//! - [`GameState::toggle_order`] flips the move-list direction.
//!
//! Illegal plays are no-ops reported through [`PlayResult::Ignored`].

use crate::history::{History, HistoryEntry, HistoryError, InvalidState, MoveDescription};
use crate::outcome::{Outcome, Status, evaluate};
use crate::{Coordinate, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Direction of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label for the toggle control, naming the order it switches to.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Toggle order desc",
            Self::Descending => "Toggle order asc",
        }
    }

    /// Whether the list runs from game start.
    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }
}

/// Why a play left the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoreReason {
    /// The board at the current step already has a winner.
    #[display("Game is already won")]
    AlreadyWon,
    /// The square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
    /// Raw index outside 0-8.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
}

/// What a play did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    /// A mark was placed and a new history entry appended.
    Placed {
        /// Player who moved.
        player: Player,
        /// Where they moved.
        coordinate: Coordinate,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl PlayResult {
    /// Whether the play changed the state.
    pub fn is_placed(&self) -> bool {
        matches!(self, PlayResult::Placed { .. })
    }
}

/// Complete game state with time-travel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: History,
    step_number: usize,
    x_is_next: bool,
    order: SortOrder,
}

/// Unchecked wire shape of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    step_number: usize,
    x_is_next: bool,
    order: SortOrder,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidState;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        raw.history
            .check_step(raw.step_number)
            .map_err(InvalidState::Step)?;
        if raw.x_is_next != (Player::to_move_at(raw.step_number) == Player::X) {
            return Err(InvalidState::TurnMismatch {
                step: raw.step_number,
                x_is_next: raw.x_is_next,
            });
        }
        Ok(Self {
            history: raw.history,
            step_number: raw.step_number,
            x_is_next: raw.x_is_next,
            order: raw.order,
        })
    }
}

impl GameState {
    /// Creates a new game showing the empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_order(SortOrder::Ascending)
    }

    /// Creates a new game with the given move-list order.
    #[instrument]
    pub fn with_order(order: SortOrder) -> Self {
        Self {
            history: History::new(),
            step_number: 0,
            x_is_next: true,
            order,
        }
    }

    /// All recorded snapshots.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the snapshot currently shown.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// Whether X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// Current move-list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Player whose mark the next play places.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// Snapshot at the current step.
    pub fn current(&self) -> &HistoryEntry {
        &self.history[self.step_number]
    }

    /// Evaluation of the board at the current step.
    pub fn outcome(&self) -> Outcome {
        evaluate(self.current().board())
    }

    /// Status line for the current step.
    pub fn status(&self) -> Status {
        Status::new(&self.outcome(), self.next_player())
    }

    /// Places the next player's mark at `position`.
    ///
    /// Ignored when the current board already has a winner or the square is
    /// taken. Otherwise any entries after the current step are discarded and
    /// the new board becomes the current step.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn play_move(&mut self, position: Position) -> PlayResult {
        let current = self.current().board();

        if evaluate(current).winner.is_some() {
            debug!("Ignoring play on a won board");
            return PlayResult::Ignored(IgnoreReason::AlreadyWon);
        }
        if current.get(position) != Square::Empty {
            debug!("Ignoring play on an occupied square");
            return PlayResult::Ignored(IgnoreReason::Occupied(position));
        }

        let player = self.next_player();
        let mut board = current.clone();
        board.set(position, Square::Occupied(player));

        self.history.truncate_after(self.step_number);
        self.step_number = self.history.push(HistoryEntry::new(board, position));
        self.x_is_next = !self.x_is_next;

        let coordinate = position.coordinate();
        debug!(%coordinate, step = self.step_number, "Move placed");
        PlayResult::Placed { player, coordinate }
    }

    /// Like [`GameState::play_move`], taking a raw 0-8 index.
    #[instrument(skip(self))]
    pub fn play_index(&mut self, index: usize) -> PlayResult {
        match Position::from_index(index) {
            Some(position) => self.play_move(position),
            None => PlayResult::Ignored(IgnoreReason::OutOfBounds(index)),
        }
    }

    /// Shows the board at `step` without changing history.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `step` is not a recorded step; the state
    /// is left unchanged.
    #[instrument(skip(self), fields(from = self.step_number))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.history.check_step(step)?;
        self.step_number = step;
        self.x_is_next = Player::to_move_at(step) == Player::X;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
        debug!(order = ?self.order, "Order toggled");
    }

    /// Starts over from an empty board, keeping the move-list order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::with_order(self.order);
    }

    /// Move list in display order.
    pub fn moves(&self) -> Vec<MoveDescription> {
        let mut moves: Vec<MoveDescription> = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveDescription {
                step,
                coordinate: entry.coordinate(),
                is_current: step == self.step_number,
            })
            .collect();
        if !self.order.is_ascending() {
            moves.reverse();
        }
        moves
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
