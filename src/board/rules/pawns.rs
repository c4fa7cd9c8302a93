//! Pawn legality: forward pushes, diagonal captures, en passant.

use super::super::state::Position;
use super::super::types::{Color, Square};

impl Position {
    pub(crate) fn pawn_move_legal(&self, color: Color, from: Square, to: Square) -> bool {
        let dr = to.row() as isize - from.row() as isize;
        // Down the board is Black's direction, up is White's
        if dr > 0 && color == Color::White {
            return false;
        }
        if dr < 0 && color == Color::Black {
            return false;
        }

        let row_diff = from.row().abs_diff(to.row());
        let col_diff = from.col().abs_diff(to.col());
        // Rows 1 and 6 count as a first move for either color
        let first_move = from.row() == 1 || from.row() == 6;

        if from.col() == to.col() {
            if !(row_diff == 1 || (first_move && row_diff == 2)) {
                return false;
            }
            // Every square stepped over, destination included, must be empty
            let step = dr.signum();
            for i in 1..=row_diff as isize {
                match from.offset(step * i, 0) {
                    Some(sq) if self.board().is_empty(sq) => {}
                    _ => return false,
                }
            }
            return true;
        }

        if col_diff == 1 && row_diff == 1 && self.board().is_empty(to) {
            return self.last_move().enables_en_passant(color, to.col());
        }

        col_diff == 1 && row_diff == 1 && !self.board().is_empty(to)
    }
}
