//! Knight legality: exactly an L-shaped offset.

use super::super::state::Position;
use super::super::types::Square;

impl Position {
    pub(crate) fn knight_move_legal(from: Square, to: Square) -> bool {
        let dr = from.row().abs_diff(to.row());
        let dc = from.col().abs_diff(to.col());
        (dr == 1 && dc == 2) || (dr == 2 && dc == 1)
    }
}
