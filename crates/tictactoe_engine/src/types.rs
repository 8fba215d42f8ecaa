//! Core domain types for tic-tac-toe.

use crate::position::{BOARD_SIZE, Position};
use serde::Serialize;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark this player writes on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mark {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by X.
    X,
    /// Cell claimed by O.
    O,
}

impl Mark {
    /// Player who owns this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::X => Some(Player::X),
            Mark::O => Some(Player::O),
        }
    }

    /// Returns true for an unclaimed cell.
    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Board {
    /// Cells indexed `[row][column]`.
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row()][pos.column()]
    }

    /// Writes a mark. Only the engine mutates boards.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.column()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Rows of marks, top to bottom.
    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Every cell with its position, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, Mark)> + '_ {
        Position::ALL.into_iter().map(|pos| (pos, self.get(pos)))
    }

    /// Positions that are still empty.
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells()
            .filter(|(_, mark)| mark.is_empty())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// Number of cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells().filter(|(_, m)| *m == mark).count()
    }
}

impl std::fmt::Display for Board {
    /// Formats the board as `X|O|X` rows separated by `-+-+-`, empty cells as spaces.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, mark) in row.iter().enumerate() {
                let symbol = match mark {
                    Mark::Empty => ' ',
                    Mark::X => 'X',
                    Mark::O => 'O',
                };
                write!(f, "{symbol}")?;
                if c < BOARD_SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < BOARD_SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Phase of the game: whose turn it is, or how it ended.
///
/// `Display` yields the status label a host shows to players.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum TurnState {
    /// X to move.
    #[default]
    #[display("X's turn")]
    AwaitingX,
    /// O to move.
    #[display("O's turn")]
    AwaitingO,
    /// X completed a line.
    #[display("X won")]
    XWon,
    /// O completed a line.
    #[display("O won")]
    OWon,
    /// Board filled without a line.
    #[display("Tie game")]
    Tied,
}

impl TurnState {
    /// Awaiting state for the given player.
    pub fn awaiting(player: Player) -> Self {
        match player {
            Player::X => TurnState::AwaitingX,
            Player::O => TurnState::AwaitingO,
        }
    }

    /// Won state for the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => TurnState::XWon,
            Player::O => TurnState::OWon,
        }
    }

    /// Player to move, or `None` once the game is over.
    pub fn to_move(self) -> Option<Player> {
        match self {
            TurnState::AwaitingX => Some(Player::X),
            TurnState::AwaitingO => Some(Player::O),
            TurnState::XWon | TurnState::OWon | TurnState::Tied => None,
        }
    }

    /// Winner, if the game ended with a completed line.
    pub fn winner(self) -> Option<Player> {
        match self {
            TurnState::XWon => Some(Player::X),
            TurnState::OWon => Some(Player::O),
            _ => None,
        }
    }

    /// Returns true for XWon, OWon and Tied.
    pub fn is_terminal(self) -> bool {
        self.to_move().is_none()
    }
}
