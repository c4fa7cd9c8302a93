//! Move and move-history types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece};
use super::square::Square;

/// A candidate move: origin and destination squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// One entry of the move history: the piece that ended up on the
/// destination square plus the origin and destination coordinates.
///
/// The history opens with a synthetic sentinel (`piece: None`, both squares
/// `(0,0)`) so the latest entry always exists. En passant eligibility is
/// decided from the latest entry alone; no older history is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub piece: Option<(Color, Piece)>,
    pub from: Square,
    pub to: Square,
}

impl MoveRecord {
    /// The synthetic opening entry written before any real move
    #[must_use]
    pub const fn sentinel() -> Self {
        MoveRecord {
            piece: None,
            from: Square(0, 0),
            to: Square(0, 0),
        }
    }

    /// Color of the moved piece, if this is not the sentinel
    #[inline]
    #[must_use]
    pub fn mover(&self) -> Option<Color> {
        self.piece.map(|(color, _)| color)
    }

    /// True when this entry records an enemy pawn double-step that makes an
    /// en passant capture onto `capture_col` available to `by` next move
    #[must_use]
    pub(crate) fn enables_en_passant(&self, by: Color, capture_col: usize) -> bool {
        let Some((color, piece)) = self.piece else {
            return false;
        };
        let enemy = by.opponent();
        piece == Piece::Pawn
            && color == enemy
            && self.from.col() == capture_col
            && self.to.col() == capture_col
            && self.from.row() == enemy.pawn_start_row()
            && self.to.row() as isize
                == enemy.pawn_start_row() as isize + 2 * enemy.pawn_direction()
    }
}
