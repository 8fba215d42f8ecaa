//! Engine error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Specific error conditions the engine reports.
///
/// Occupied cells and finished games are not errors: those moves are
/// ignored and reported through [`MoveOutcome`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum EngineErrorKind {
    /// Coordinates fall outside the 3x3 grid.
    #[display("Position ({}, {}) is outside the 3x3 board", row, column)]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
    },
}

/// Engine error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Engine error: {} at {}:{}", kind, file, line)]
pub struct EngineError {
    /// What went wrong.
    pub kind: EngineErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EngineError {
    /// Creates a new engine error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: EngineErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for an [`EngineErrorKind::OutOfBounds`] error.
    #[track_caller]
    pub fn out_of_bounds(row: isize, column: isize) -> Self {
        Self::new(EngineErrorKind::OutOfBounds { row, column })
    }

    /// Returns true if this error reports out-of-range coordinates.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, EngineErrorKind::OutOfBounds { .. })
    }
}

impl From<EngineErrorKind> for EngineError {
    #[track_caller]
    fn from(kind: EngineErrorKind) -> Self {
        Self::new(kind)
    }
}
