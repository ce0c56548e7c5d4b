//! Application state and logic.

use super::input::{Intent, intent_for, move_cursor};
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameState, PlayResult, Position};
use tracing::{debug, info, instrument, warn};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// Returns the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    /// Row of the move list under the selection, in display order.
    selected: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: GameState) -> Self {
        let mut app = Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: None,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Square under the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Selected row of the move list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Feedback from the last ignored action, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the main loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(intent) = intent_for(key) {
            self.handle_intent(intent);
        }
    }

    /// Applies one intent to the game.
    #[instrument(skip(self))]
    pub fn handle_intent(&mut self, intent: Intent) {
        self.message = None;
        match intent {
            Intent::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Intent::Restart => {
                self.game.restart();
                self.select_current();
            }
            Intent::ToggleOrder => {
                self.game.toggle_order();
                let last = self.game.history().len() - 1;
                self.selected = last - self.selected.min(last);
            }
            Intent::SwitchFocus => {
                self.focus = self.focus.toggle();
                debug!(focus = ?self.focus, "Focus switched");
            }
            Intent::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
            Intent::Activate => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump_to_selected(),
            },
            Intent::Navigate(key) => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::History => self.move_selection(key),
            },
        }
    }

    fn play(&mut self, position: Position) {
        match self.game.play_move(position) {
            PlayResult::Placed { player, coordinate } => {
                debug!(%player, %coordinate, "Move applied to UI state");
                if self.game.outcome().is_over() {
                    info!(status = %self.game.status(), "Game over");
                }
                self.select_current();
            }
            PlayResult::Ignored(reason) => {
                debug!(%reason, "Play ignored");
                self.message = Some(reason.to_string());
            }
        }
    }

    fn jump_to_selected(&mut self) {
        let Some(step) = self.game.moves().get(self.selected).map(|m| m.step) else {
            return;
        };
        if let Err(e) = self.game.jump_to(step) {
            warn!(error = %e, "Jump rejected");
            self.message = Some(e.to_string());
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        self.selected = match key {
            KeyCode::Up => self.selected.saturating_sub(1),
            KeyCode::Down => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    /// Points the move-list selection at the current step.
    fn select_current(&mut self) {
        self.selected = self
            .game
            .moves()
            .iter()
            .position(|m| m.is_current)
            .unwrap_or(0);
    }
}
