//! End-to-end search behavior through the public API.

use std::time::Duration;

use chess_ai::{
    choose_move, choose_move_with, Board, CastlingRights, Color, Deadline, Piece, Position,
    SearchError, Square, Weights, BLACK_WIN_SCORE,
};

/// Position after 1. f3 e5 2. g4 — Black mates with Qh4
fn fools_mate_setup() -> Position {
    Position::new()
        .apply_move(Square(6, 5), Square(5, 5))
        .apply_move(Square(1, 4), Square(3, 4))
        .apply_move(Square(6, 6), Square(4, 6))
}

#[test]
fn finds_mate_in_one() {
    let pos = fools_mate_setup();
    let (value, mv) =
        choose_move(&pos, Color::Black, 2, Deadline::unbounded()).expect("search completes");
    assert_eq!(value, BLACK_WIN_SCORE, "mate dominates every other line");
    assert_eq!(mv.from, Square(0, 3), "queen departs d8");
    assert_eq!(mv.to, Square(4, 7), "queen lands on h4");
}

#[test]
fn search_value_is_deterministic_without_time_pressure() {
    let pos = Position::new().apply_move(Square(6, 4), Square(4, 4));
    let first = choose_move_with(&pos, Color::Black, 2, Deadline::unbounded(), &Weights::TRAINED)
        .expect("first run completes");
    let second = choose_move_with(&pos, Color::Black, 2, Deadline::unbounded(), &Weights::TRAINED)
        .expect("second run completes");
    assert_eq!(first.0, second.0, "same depth, same value");
}

#[test]
fn returns_a_legal_candidate_from_the_start() {
    let pos = Position::new();
    let (_, mv) =
        choose_move(&pos, Color::White, 2, Deadline::unbounded()).expect("search completes");
    assert!(pos.is_legal(mv.from, mv.to), "chosen move must be playable");
    assert_eq!(
        pos.board().color_at(mv.from),
        Some(Color::White),
        "engine moves its own piece"
    );
}

#[test]
fn expired_deadline_is_a_hard_failure() {
    let pos = Position::new();
    let deadline = Deadline::after(Duration::ZERO);
    std::thread::sleep(Duration::from_millis(5));
    let result = choose_move(&pos, Color::White, 4, deadline);
    assert_eq!(result, Err(SearchError::OutOfTime { depth: 2 }));
}

#[test]
fn terminal_root_reports_no_moves() {
    let mut board = Board::empty();
    board.set(Square(7, 4), Some((Color::White, Piece::King)));
    board.set(Square(0, 0), Some((Color::Black, Piece::Rook)));
    // No black king: the game is already decided
    let pos = Position::from_parts(board, CastlingRights::none(), Vec::new());
    let result = choose_move(&pos, Color::Black, 2, Deadline::unbounded());
    assert_eq!(result, Err(SearchError::NoMoves));
}

#[test]
fn deeper_search_still_completes() {
    let pos = Position::new();
    let result = choose_move(&pos, Color::Black, 3, Deadline::after(Duration::from_secs(120)));
    assert!(result.is_ok(), "depth 3 should finish well inside the budget");
}

#[test]
fn avoids_hanging_the_queen() {
    // Black queen on h4 is attacked by the g2 pawn's diagonal once White
    // plays g3; give Black the move in a position where queen retreats
    // exist and check it does not leave the queen en prise to a pawn
    let pos = Position::new()
        .apply_move(Square(6, 4), Square(4, 4)) // e4
        .apply_move(Square(1, 4), Square(3, 4)) // e5
        .apply_move(Square(6, 6), Square(5, 6)) // g3
        .apply_move(Square(0, 3), Square(4, 7)); // Qh4 hangs to g3xh4
    let (_, mv) = choose_move(&pos, Color::White, 2, Deadline::unbounded())
        .expect("search completes");
    // The pawn capture wins a queen; any reasonable weighting takes it
    assert_eq!(mv.from, Square(5, 6));
    assert_eq!(mv.to, Square(4, 7));
}
