//! Terminal host loop driving the engine.

use crate::config::DisplayConfig;
use crate::input::{Command, parse_command};
use crate::render::{render_board, status_line};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameEngine, MoveOutcome, TurnState};
use tracing::{debug, info, instrument, warn};

/// Plays one game, reading moves from `input` and drawing to `output`.
///
/// Returns the final turn state, which is non-terminal if the player quit
/// or input ran out.
#[instrument(skip_all)]
pub fn run_game<R: BufRead, W: Write>(
    config: &DisplayConfig,
    input: R,
    mut output: W,
) -> anyhow::Result<TurnState> {
    let mut engine = GameEngine::new();
    draw(&engine, config, &mut output)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                debug!(error = %e, "Unreadable input");
                writeln!(output, "{e}")?;
                continue;
            }
        };

        let (row, column) = match command {
            Command::Quit => {
                info!("Player quit");
                break;
            }
            Command::Move { row, column } => (row, column),
        };

        match engine.apply_move(row, column) {
            Ok(MoveOutcome::Applied) => draw(&engine, config, &mut output)?,
            // Clicking a filled cell visibly does nothing.
            Ok(outcome) => debug!(%outcome, "Move ignored"),
            Err(e) => {
                warn!(error = %e, "Move off the board");
                writeln!(output, "({row}, {column}) is not on the board")?;
            }
        }

        if engine.current_state().is_terminal() {
            break;
        }
    }

    let state = engine.current_state();
    info!(?state, "Game finished");
    Ok(state)
}

fn draw<W: Write>(engine: &GameEngine, config: &DisplayConfig, output: &mut W) -> std::io::Result<()> {
    write!(output, "{}", render_board(engine, config))?;
    writeln!(output, "{}", status_line(engine))?;
    output.flush()
}
