//! Parsing of player input lines.

use derive_more::{Display, Error};
use tracing::instrument;

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Claim the cell at raw board coordinates.
    Move {
        /// Row as typed, not yet validated.
        row: isize,
        /// Column as typed, not yet validated.
        column: isize,
    },
    /// Leave the game.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not read {:?}: expected `<row> <column>` or `q`", input)]
pub struct InputError {
    /// The offending line, trimmed.
    pub input: String,
}

/// Parses `row column`, `row,column` or `q`/`quit`.
///
/// Coordinates are only checked for being integers; the engine decides
/// whether they are on the board.
#[instrument(level = "debug")]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    let err = || InputError {
        input: trimmed.to_string(),
    };

    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let mut parts = trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty());

    let (Some(row), Some(column), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(err());
    };

    let row = row.parse().map_err(|_| err())?;
    let column = column.parse().map_err(|_| err())?;
    Ok(Command::Move { row, column })
}
