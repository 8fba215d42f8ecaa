//! Tic-tac-toe rules engine.
//!
//! A plain synchronous state machine with no rendering or framework
//! dependency. A host reports clicks as board coordinates, then polls the
//! engine to decide what to draw.
//!
//! # Architecture
//!
//! - **Engine**: [`GameEngine`] owns the [`Board`] and [`TurnState`] and is
//!   their only mutator
//! - **Rules**: pure win and tie detection over the 8 fixed lines
//! - **Position**: coordinates validated once, at the boundary
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, Mark, MoveOutcome, TurnState};
//!
//! # fn example() -> Result<(), tictactoe_engine::EngineError> {
//! let mut game = GameEngine::new();
//! assert_eq!(game.apply_move(1, 1)?, MoveOutcome::Applied);
//! assert_eq!(game.cell_at(1, 1)?, Mark::X);
//! assert_eq!(game.current_state(), TurnState::AwaitingO);
//!
//! // Clicking a filled cell does nothing.
//! assert!(!game.apply_move(1, 1)?.is_applied());
//! assert_eq!(game.current_state().to_string(), "O's turn");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, MoveOutcome};
pub use error::{EngineError, EngineErrorKind};
pub use position::{BOARD_SIZE, Position};
pub use rules::{WINNING_LINES, check_winner, is_full, winning_line};
pub use types::{Board, Mark, Player, TurnState};
