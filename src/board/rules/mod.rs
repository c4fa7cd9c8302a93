//! Per-piece move legality.
//!
//! Legality checks are pure probes: they never touch castling rights or the
//! board. All side effects of a move (rights clearing, the castle Rook hop,
//! en-passant capture, promotion) live in `Position::apply_move`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::state::Position;
use super::types::{Piece, Square};

impl Position {
    /// Decide whether moving the piece on `from` to `to` is legal.
    ///
    /// Returns false for an empty origin or a same-color capture. Turn
    /// order is not enforced here; the caller decides whose move it is.
    #[must_use]
    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.board().get(from) else {
            return false;
        };
        if self.board().color_at(to) == Some(color) {
            return false;
        }
        match piece {
            Piece::Rook => self.rook_move_legal(from, to),
            Piece::Knight => Self::knight_move_legal(from, to),
            Piece::Bishop => self.bishop_move_legal(from, to),
            Piece::Queen => self.queen_move_legal(from, to),
            Piece::King => self.king_move_legal(color, from, to),
            Piece::Pawn => self.pawn_move_legal(color, from, to),
        }
    }

    /// No occupied square strictly between `from` and `to`, which must
    /// share a rank, file, or diagonal.
    #[must_use]
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let dr = (to.row() as isize - from.row() as isize).signum();
        let dc = (to.col() as isize - from.col() as isize).signum();
        let mut sq = from;
        loop {
            sq = match sq.offset(dr, dc) {
                Some(next) => next,
                None => return true,
            };
            if sq == to {
                return true;
            }
            if !self.board().is_empty(sq) {
                return false;
            }
        }
    }
}
