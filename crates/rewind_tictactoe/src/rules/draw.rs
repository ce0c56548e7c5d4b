//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_squares([
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
        ]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        // X X X / O O X / X O O
        let board = Board::from_squares([
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
            Square::Occupied(Player::X),
            Square::Occupied(Player::X),
            Square::Occupied(Player::O),
            Square::Occupied(Player::O),
        ]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
