//! Board snapshots and the branching move history.

use crate::{Board, Coordinate, Position};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// One snapshot in the history: the board after a move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Square of the move that produced this board; `None` for game start.
    #[getter(skip)]
    position: Option<Position>,
}

impl HistoryEntry {
    /// The empty board that starts every game.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// Entry for `board` reached by a move at `position`.
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// Square of the move that produced this entry.
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// 1-indexed `(col, row)` of the move.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.position.map(Position::coordinate)
    }
}

/// Ordered snapshots, never empty.
///
/// Entries are only appended or truncated away. Nothing rewrites an entry
/// in place, so jumping to an old step always shows exactly that board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Unchecked wire shape of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawHistory> for History {
    type Error = InvalidState;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err(InvalidState::EmptyHistory);
        }
        Ok(Self {
            entries: raw.entries,
        })
    }
}

impl History {
    /// History holding only the start entry.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::start()],
        }
    }

    /// Number of entries (moves + 1).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// The newest entry.
    pub fn last(&self) -> &HistoryEntry {
        &self[self.entries.len() - 1]
    }

    /// Iterates entries from game start.
    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    /// Drops every entry after `step`, discarding that future branch.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn truncate_after(&mut self, step: usize) {
        let keep = step.saturating_add(1).max(1);
        if keep < self.entries.len() {
            debug!(dropped = self.entries.len() - keep, "Discarding future branch");
        }
        self.entries.truncate(keep);
    }

    /// Appends a snapshot and returns its step.
    pub fn push(&mut self, entry: HistoryEntry) -> usize {
        self.entries.push(entry);
        self.entries.len() - 1
    }

    /// Validates a step index against the current history.
    #[track_caller]
    pub fn check_step(&self, step: usize) -> Result<(), HistoryError> {
        if step < self.entries.len() {
            Ok(())
        } else {
            Err(HistoryError::new(step, self.entries.len()))
        }
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for History {
    type Output = HistoryEntry;

    fn index(&self, step: usize) -> &HistoryEntry {
        &self.entries[step]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A jump outside the recorded history.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Step {} outside history of {} entries at {}:{}", step, len, file, line)]
pub struct HistoryError {
    /// Requested step.
    pub step: usize,
    /// History length at the time of the request.
    pub len: usize,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(step: usize, len: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            step,
            len,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Deserialized state that breaks a game invariant.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidState {
    /// History without the start entry.
    #[display("History has no entries")]
    EmptyHistory,
    /// Current step not in the history.
    #[display("{}", _0)]
    Step(HistoryError),
    /// Turn flag disagrees with the step's parity.
    #[display("x_is_next = {} contradicts step {}", x_is_next, step)]
    TurnMismatch {
        /// Current step.
        step: usize,
        /// Recorded turn flag.
        x_is_next: bool,
    },
}

/// A history entry as presented in the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescription {
    /// Step this entry jumps to.
    pub step: usize,
    /// Coordinate of the move; `None` for game start.
    pub coordinate: Option<Coordinate>,
    /// Whether this is the step currently shown.
    pub is_current: bool,
}

impl MoveDescription {
    /// Button text: "Go to game start" or "Go to move #N".
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// "(col, row)", or "( , )" for game start.
    pub fn coordinate_label(&self) -> String {
        match self.coordinate {
            Some(coordinate) => coordinate.to_string(),
            None => "( , )".to_string(),
        }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.coordinate_label(), self.label())
    }
}
