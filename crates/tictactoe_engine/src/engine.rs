//! The tic-tac-toe game engine.

use crate::error::EngineError;
use crate::position::Position;
use crate::rules;
use crate::types::{Board, Mark, TurnState};
use serde::Serialize;
use tracing::{debug, instrument};

/// What happened to a requested move.
///
/// Only [`MoveOutcome::Applied`] changes the game. The other variants are
/// the normal result of clicking a filled cell or playing on after the end,
/// and leave the engine exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum MoveOutcome {
    /// The mark was written and the turn state advanced.
    #[display("Move applied")]
    Applied,
    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),
    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,
}

impl MoveOutcome {
    /// Returns true if the move changed the game.
    pub fn is_applied(self) -> bool {
        self == MoveOutcome::Applied
    }
}

/// Tic-tac-toe rules engine.
///
/// Owns the board and turn state and is their only mutator. A new game is
/// a new engine; finished games never change again.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GameEngine {
    board: Board,
    state: TurnState,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a move at raw coordinates.
    ///
    /// Occupied cells and finished games are ignored, not errors: the
    /// returned [`MoveOutcome`] says which, and nothing changes.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds [`EngineError`] if the coordinates are not
    /// on the board. The engine is left untouched.
    #[track_caller]
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn apply_move(&mut self, row: isize, column: isize) -> Result<MoveOutcome, EngineError> {
        let pos = Position::new(row, column)?;
        Ok(self.place(pos))
    }

    /// Applies a move at a validated position.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        let Some(player) = self.state.to_move() else {
            debug!("Ignoring move, game is over");
            return MoveOutcome::GameOver;
        };

        if !self.board.is_empty(pos) {
            debug!(%pos, "Ignoring move, cell occupied");
            return MoveOutcome::CellOccupied(pos);
        }

        self.board.set(pos, player.mark());

        // Only the mark just placed can have completed a line.
        self.state = if rules::has_line(&self.board, player) {
            TurnState::won_by(player)
        } else if rules::is_full(&self.board) {
            TurnState::Tied
        } else {
            TurnState::awaiting(player.opponent())
        };

        debug!(%pos, %player, next = ?self.state, "Move applied");
        MoveOutcome::Applied
    }

    /// Current turn state.
    pub fn current_state(&self) -> TurnState {
        self.state
    }

    /// Mark at raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds [`EngineError`] if the coordinates are not
    /// on the board.
    #[track_caller]
    pub fn cell_at(&self, row: isize, column: isize) -> Result<Mark, EngineError> {
        let pos = Position::new(row, column)?;
        Ok(self.mark_at(pos))
    }

    /// Mark at a validated position.
    pub fn mark_at(&self, pos: Position) -> Mark {
        self.board.get(pos)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The completed line, once the game has been won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.state
            .winner()
            .and_then(|player| rules::winning_line(&self.board, player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn play(engine: &mut GameEngine, moves: &[(isize, isize)]) {
        for &(row, column) in moves {
            let outcome = engine.apply_move(row, column).expect("in bounds");
            assert!(outcome.is_applied(), "move ({row}, {column}) was {outcome}");
        }
    }

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_state(), TurnState::AwaitingX);
        assert!(engine.board().cells().all(|(_, mark)| mark == Mark::Empty));
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(1, 1)]);
        assert_eq!(engine.current_state(), TurnState::AwaitingO);
        play(&mut engine, &[(0, 0)]);
        assert_eq!(engine.current_state(), TurnState::AwaitingX);
        assert_eq!(engine.mark_at(Position::CENTER), Mark::X);
        assert_eq!(engine.mark_at(Position::TOP_LEFT), Mark::O);
    }

    #[test]
    fn test_out_of_bounds_does_not_touch_state() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(0, 0)]);
        let before = engine.clone();

        let err = engine.apply_move(3, 0).expect_err("row 3 is off the board");
        assert!(err.is_out_of_bounds());
        assert!(engine.apply_move(0, -1).is_err());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_occupied_reports_position() {
        let mut engine = GameEngine::new();
        play(&mut engine, &[(2, 1)]);
        assert_eq!(
            engine.apply_move(2, 1).expect("in bounds"),
            MoveOutcome::CellOccupied(Position::BOTTOM_CENTER)
        );
    }

    #[test]
    fn test_winning_line_reported() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.winning_line(), None);
        // O takes the middle column.
        play(&mut engine, &[(0, 0), (0, 1), (2, 2), (1, 1), (1, 0), (2, 1)]);
        assert_eq!(engine.current_state(), TurnState::OWon);
        assert_eq!(engine.current_state().winner(), Some(Player::O));
        assert_eq!(
            engine.winning_line(),
            Some([Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER])
        );
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_tie() {
        let mut engine = GameEngine::new();
        // X O X / O X O / O X X: the final move at (2, 2) completes the diagonal.
        play(
            &mut engine,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(engine.current_state(), TurnState::XWon);
    }
}
