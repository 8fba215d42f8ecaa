//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::instrument;

/// The 8 lines that win the game.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // Columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// First line held entirely by `player`, if any.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; 3]> {
    let mark = player.mark();
    WINNING_LINES
        .into_iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns true if `player` holds all three cells of some line.
pub fn has_line(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Checks if there is a winner on the board.
///
/// X is checked across every line before O. Both holding a line cannot
/// happen under legal play; if it does, X is reported.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| has_line(board, player))
}
