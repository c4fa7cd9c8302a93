//! Evaluation tests.

use super::super::eval::{
    evaluate, evaluate_with, Weights, BLACK_WIN_SCORE, TIE_SCORE, WEIGHT_COUNT, WHITE_WIN_SCORE,
};
use super::super::state::{Board, Position};
use super::super::types::{CastlingRights, Color, Piece, Square};
use super::{position_with, position_with_history, record};

#[test]
fn test_starting_position_is_balanced() {
    let pos = Position::new();
    assert_eq!(evaluate(&pos), 0);
}

#[test]
fn test_starting_position_balanced_under_mirrored_vectors() {
    let pos = Position::new();
    assert_eq!(evaluate_with(&pos, &Weights([1; WEIGHT_COUNT])), 0);

    // An arbitrary vector whose White blocks mirror the Black blocks
    let mut mirrored = [0; WEIGHT_COUNT];
    let black_half = [7, 13, 2, 91, 455, 3, 8, 3, 8, 21, 5, 9, 12, 30, 44, 1, 6, 2, 77];
    // material 0-4 and 5-9
    mirrored[..5].copy_from_slice(&black_half[..5]);
    mirrored[5..10].copy_from_slice(&black_half[..5]);
    // distance pairs 10/12 and 11/13
    mirrored[10] = 17;
    mirrored[12] = 17;
    mirrored[11] = 23;
    mirrored[13] = 23;
    // protection, attack, center blocks
    for i in 0..15 {
        mirrored[14 + i] = black_half[i % black_half.len()] + i as i32;
        mirrored[29 + i] = mirrored[14 + i];
    }
    assert_eq!(evaluate_with(&pos, &Weights(mirrored)), 0);
}

#[test]
fn test_missing_king_dominates_any_weights() {
    let no_black_king = position_with(&[
        (7, 4, Color::White, Piece::King),
        (0, 0, Color::Black, Piece::Rook),
    ]);
    assert_eq!(evaluate(&no_black_king), WHITE_WIN_SCORE);
    assert_eq!(
        evaluate_with(&no_black_king, &Weights::TRAINED),
        WHITE_WIN_SCORE
    );

    let no_white_king = position_with(&[
        (0, 4, Color::Black, Piece::King),
        (7, 0, Color::White, Piece::Rook),
    ]);
    assert_eq!(evaluate(&no_white_king), BLACK_WIN_SCORE);
    assert_eq!(
        evaluate_with(&no_white_king, &Weights::TRAINED),
        BLACK_WIN_SCORE
    );
}

#[test]
fn test_tie_scores_zero() {
    let stalemate = position_with_history(
        &[
            (0, 0, Color::Black, Piece::King),
            (2, 1, Color::White, Piece::Queen),
            (2, 2, Color::White, Piece::King),
        ],
        vec![record(Color::White, Piece::Queen, Square(2, 5), Square(2, 1))],
    );
    assert_eq!(evaluate_with(&stalemate, &Weights::TRAINED), TIE_SCORE);
}

#[test]
fn test_material_advantage_sets_the_sign() {
    let mut board = Board::standard();
    board.set(Square(7, 3), None); // remove White's queen
    let black_up = Position::from_parts(board, CastlingRights::all(), Vec::new());
    assert!(evaluate(&black_up) > 0, "black up a queen should be positive");

    let mut board = Board::standard();
    board.set(Square(0, 3), None); // remove Black's queen
    let white_up = Position::from_parts(board, CastlingRights::all(), Vec::new());
    assert!(evaluate(&white_up) < 0, "white up a queen should be negative");
}

#[test]
fn test_checkmate_positions_hit_the_sentinels() {
    let fools_mate = Position::new()
        .apply_move(Square(6, 5), Square(5, 5))
        .apply_move(Square(1, 4), Square(3, 4))
        .apply_move(Square(6, 6), Square(4, 6))
        .apply_move(Square(0, 3), Square(4, 7));
    assert_eq!(evaluate(&fools_mate), BLACK_WIN_SCORE);
}

#[test]
fn test_evaluation_is_deterministic() {
    let pos = Position::new().apply_move(Square(6, 4), Square(4, 4));
    assert_eq!(
        evaluate_with(&pos, &Weights::TRAINED),
        evaluate_with(&pos, &Weights::TRAINED)
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_weights_serde_round_trip() {
    let json = serde_json::to_string(&Weights::TRAINED).expect("serialize");
    let back: Weights = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, Weights::TRAINED);
}
