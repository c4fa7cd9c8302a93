//! King legality: single-square steps and castling.

use super::super::state::Position;
use super::super::types::{Color, Square};

impl Position {
    pub(crate) fn king_move_legal(&self, color: Color, from: Square, to: Square) -> bool {
        if from.row().abs_diff(to.row()) <= 1 && from.col().abs_diff(to.col()) <= 1 {
            return true;
        }

        // Castling: King travels two files from its home square. The
        // intervening squares must be empty and the right still set. The
        // path and destination are NOT checked for enemy attacks, a known
        // deviation from the standard rule.
        let row = color.home_row();
        if from != Square(row, 4) || to.row() != row {
            return false;
        }
        match to.col() {
            6 => {
                self.castling().has(color, true)
                    && self.board().is_empty(Square(row, 5))
                    && self.board().is_empty(Square(row, 6))
            }
            2 => {
                self.castling().has(color, false)
                    && self.board().is_empty(Square(row, 1))
                    && self.board().is_empty(Square(row, 2))
                    && self.board().is_empty(Square(row, 3))
            }
            _ => false,
        }
    }
}
