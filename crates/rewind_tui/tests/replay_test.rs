//! Tests for headless replay and settings wiring.

use rewind_tictactoe::{Player, SortOrder, Status};
use rewind_tui::{Settings, replay};
use std::io::Write;

#[test]
fn test_replay_draw() {
    let replay = replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8], None, SortOrder::Ascending).unwrap();
    assert_eq!(replay.game.status(), Status::Draw);
    assert!(replay.ignored.is_empty());
    assert!(replay.report().contains("\nDraw\n"));
}

#[test]
fn test_replay_branch_after_jump() {
    // Jump is applied after all moves, so branching needs two replays.
    let first = replay(&[0, 1, 2], Some(1), SortOrder::Ascending).unwrap();
    let mut game = first.game;
    assert_eq!(game.next_player(), Player::O);
    assert!(game.play_index(8).is_placed());
    assert_eq!(game.history().len(), 3);
}

#[test]
fn test_descending_settings_reverse_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "descending = true").unwrap();
    let settings = Settings::load_or_default(file.path()).unwrap();

    let replay = replay(&[4, 0], None, settings.order()).unwrap();
    let report = replay.report();
    let latest = report.find("Go to move #2").unwrap();
    let start = report.find("Go to game start").unwrap();
    assert!(latest < start);
}
