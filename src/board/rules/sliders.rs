//! Rook, bishop, and queen legality: ray alignment plus a clear path.

use super::super::state::Position;
use super::super::types::Square;

impl Position {
    pub(crate) fn rook_move_legal(&self, from: Square, to: Square) -> bool {
        let same_row = from.row() == to.row();
        let same_col = from.col() == to.col();
        if same_row == same_col {
            // diagonal or zero-length
            return false;
        }
        self.path_clear(from, to)
    }

    pub(crate) fn bishop_move_legal(&self, from: Square, to: Square) -> bool {
        if from.row().abs_diff(to.row()) != from.col().abs_diff(to.col()) {
            return false;
        }
        self.path_clear(from, to)
    }

    pub(crate) fn queen_move_legal(&self, from: Square, to: Square) -> bool {
        let diagonal = from.row().abs_diff(to.row()) == from.col().abs_diff(to.col());
        let straight = (from.row() == to.row()) != (from.col() == to.col());
        if !diagonal && !straight {
            return false;
        }
        self.path_clear(from, to)
    }
}
