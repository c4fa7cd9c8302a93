//! Unit tests for the board core.

mod eval;

use super::state::{Board, Position};
use super::types::{CastlingRights, Color, MoveRecord, Piece, Square};

/// Position holding exactly the given pieces, full castling rights, and a
/// sentinel-only history.
pub(crate) fn position_with(pieces: &[(usize, usize, Color, Piece)]) -> Position {
    position_with_history(pieces, Vec::new())
}

/// Like [`position_with`], with explicit history records appended after the
/// sentinel.
pub(crate) fn position_with_history(
    pieces: &[(usize, usize, Color, Piece)],
    history: Vec<MoveRecord>,
) -> Position {
    let mut board = Board::empty();
    for &(row, col, color, piece) in pieces {
        board.set(Square(row, col), Some((color, piece)));
    }
    let mut full_history = vec![MoveRecord::sentinel()];
    full_history.extend(history);
    Position::from_parts(board, CastlingRights::all(), full_history)
}

/// History record for a completed move.
pub(crate) fn record(color: Color, piece: Piece, from: Square, to: Square) -> MoveRecord {
    MoveRecord {
        piece: Some((color, piece)),
        from,
        to,
    }
}
