//! Validated board coordinates.

use crate::error::EngineError;
use serde::Serialize;
use tracing::instrument;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A cell on the tic-tac-toe board, addressed by row and column.
///
/// A `Position` can only be built from coordinates inside the 3x3 grid,
/// so holding one is proof that it names a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    column: u8,
}

impl Position {
    /// Top-left corner.
    pub const TOP_LEFT: Position = Position::at(0, 0);
    /// Top edge, middle.
    pub const TOP_CENTER: Position = Position::at(0, 1);
    /// Top-right corner.
    pub const TOP_RIGHT: Position = Position::at(0, 2);
    /// Left edge, middle.
    pub const MIDDLE_LEFT: Position = Position::at(1, 0);
    /// Center cell.
    pub const CENTER: Position = Position::at(1, 1);
    /// Right edge, middle.
    pub const MIDDLE_RIGHT: Position = Position::at(1, 2);
    /// Bottom-left corner.
    pub const BOTTOM_LEFT: Position = Position::at(2, 0);
    /// Bottom edge, middle.
    pub const BOTTOM_CENTER: Position = Position::at(2, 1);
    /// Bottom-right corner.
    pub const BOTTOM_RIGHT: Position = Position::at(2, 2);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    // Callers outside this module go through `new`.
    const fn at(row: u8, column: u8) -> Self {
        Self { row, column }
    }

    /// Validates raw coordinates.
    ///
    /// # Errors
    ///
    /// Returns an out-of-bounds [`EngineError`] if either coordinate is
    /// negative or not less than 3. Coordinates are never clamped.
    #[track_caller]
    #[instrument(level = "trace")]
    pub fn new(row: isize, column: isize) -> Result<Self, EngineError> {
        let in_range = |v: isize| (0..BOARD_SIZE as isize).contains(&v);
        if in_range(row) && in_range(column) {
            Ok(Self::at(row as u8, column as u8))
        } else {
            Err(EngineError::out_of_bounds(row, column))
        }
    }

    /// Row index (0-2, top to bottom).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2, left to right).
    pub fn column(self) -> usize {
        self.column as usize
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self.row() * BOARD_SIZE + self.column()
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.column) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl TryFrom<(isize, isize)> for Position {
    type Error = EngineError;

    #[track_caller]
    fn try_from((row, column): (isize, isize)) -> Result<Self, Self::Error> {
        Self::new(row, column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
