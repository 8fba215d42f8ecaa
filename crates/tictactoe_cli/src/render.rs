//! Text rendering of the engine state.

use crate::config::DisplayConfig;
use tictactoe_engine::{BOARD_SIZE, GameEngine};

/// Draws the board with the configured symbols.
pub fn render_board(engine: &GameEngine, config: &DisplayConfig) -> String {
    let coords = *config.show_coordinates();
    let mut out = String::new();

    if coords {
        out.push_str("   0 1 2\n");
    }
    for (r, row) in engine.board().rows().iter().enumerate() {
        if coords {
            out.push_str(&format!("{r}  "));
        }
        let cells: Vec<&str> = row.iter().map(|&mark| config.symbol(mark)).collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if r < BOARD_SIZE - 1 {
            if coords {
                out.push_str("   ");
            }
            out.push_str("-+-+-\n");
        }
    }
    out
}

/// Status label, naming the completed line once someone has won.
pub fn status_line(engine: &GameEngine) -> String {
    let state = engine.current_state();
    match engine.winning_line() {
        Some(line) => {
            let cells: Vec<String> = line.iter().map(|pos| pos.to_string()).collect();
            format!("{state} ({})", cells.join(" "))
        }
        None => state.to_string(),
    }
}
