//! Scenario tests for the tic-tac-toe engine.

use tictactoe_engine::{GameEngine, Mark, MoveOutcome, Position, TurnState};

fn play(engine: &mut GameEngine, moves: &[(isize, isize)]) {
    for &(row, column) in moves {
        let outcome = engine.apply_move(row, column).expect("Valid coordinates");
        assert_eq!(outcome, MoveOutcome::Applied, "move ({row}, {column})");
    }
}

#[test]
fn test_top_row_win() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(engine.current_state(), TurnState::AwaitingX);

    play(&mut engine, &[(0, 2)]);
    assert_eq!(engine.current_state(), TurnState::XWon);
    assert_eq!(engine.current_state().to_string(), "X won");
}

/// Legal tie: X O X / O X X / O X O.
const TIE_MOVES: [(isize, isize); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 0),
    (1, 1),
    (2, 0),
    (1, 2),
    (2, 2),
    (2, 1),
];

#[test]
fn test_tie_game() {
    let mut engine = GameEngine::new();
    play(&mut engine, &TIE_MOVES[..8]);

    // One empty cell left is never a tie.
    assert_eq!(engine.board().empty_positions(), vec![Position::BOTTOM_CENTER]);
    assert_eq!(engine.current_state(), TurnState::AwaitingX);

    play(&mut engine, &TIE_MOVES[8..]);
    assert_eq!(engine.current_state(), TurnState::Tied);
    assert_eq!(engine.current_state().to_string(), "Tie game");
    assert_eq!(engine.board().to_string(), "X|O|X\n-+-+-\nO|X|X\n-+-+-\nO|X|O");
}

#[test]
fn test_double_click_same_cell() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.apply_move(0, 0).unwrap(), MoveOutcome::Applied);
    assert_eq!(
        engine.apply_move(0, 0).unwrap(),
        MoveOutcome::CellOccupied(Position::TOP_LEFT)
    );

    assert_eq!(engine.cell_at(0, 0).unwrap(), Mark::X);
    assert_eq!(engine.board().count(Mark::Empty), 8);
    assert_eq!(engine.current_state(), TurnState::AwaitingO);
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let finished = engine.clone();

    for pos in Position::ALL {
        assert_eq!(engine.place(pos), MoveOutcome::GameOver);
    }
    assert_eq!(engine, finished);
}

#[test]
fn test_moves_after_tie_are_ignored() {
    let mut engine = GameEngine::new();
    play(&mut engine, &TIE_MOVES);
    assert_eq!(engine.current_state(), TurnState::Tied);
    let finished = engine.clone();

    assert_eq!(engine.apply_move(1, 1).unwrap(), MoveOutcome::GameOver);
    assert_eq!(engine, finished);
}

#[test]
fn test_cell_at_out_of_bounds() {
    let mut engine = GameEngine::new();
    play(&mut engine, &[(1, 1)]);
    let before = engine.clone();

    for (row, column) in [(3, 0), (0, 3), (-1, 1), (1, -1), (3, 3)] {
        let err = engine.cell_at(row, column).expect_err("Off the board");
        assert!(err.is_out_of_bounds(), "({row}, {column})");
    }
    assert_eq!(engine, before);
}

#[test]
fn test_apply_move_out_of_bounds() {
    let mut engine = GameEngine::new();
    let before = engine.clone();

    assert!(engine.apply_move(-1, 0).unwrap_err().is_out_of_bounds());
    assert!(engine.apply_move(0, 3).unwrap_err().is_out_of_bounds());
    assert_eq!(engine, before);
    assert_eq!(engine.current_state(), TurnState::AwaitingX);
}
