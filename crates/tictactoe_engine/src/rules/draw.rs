//! Tie detection logic for tic-tac-toe.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
///
/// A full board is only a tie when no line was completed; the engine
/// checks for a winner first.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|(_, mark)| !mark.is_empty())
}
