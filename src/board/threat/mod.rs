//! Per-color threat index: attacked squares with multiplicity, candidate
//! move lists, and terminal-state detection, built in one pass over a
//! position snapshot.

mod generate;
mod outcome;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::state::Position;
use super::types::{Color, Move, Piece, Square, ALL_DIRS, DIAGONAL_DIRS, STRAIGHT_DIRS};

/// Terminal status of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Ongoing,
    WhiteWins,
    BlackWins,
    Tie,
}

/// Threat and candidate-move index for both colors.
///
/// For each color: how many of its pieces attack each square (rays count
/// through to one blocker, except that they continue past the enemy King so
/// the King cannot treat its own shadow as safe), and the list of
/// pseudo-legal `(from, to)` candidate moves. King candidates exclude
/// opponent-threatened squares and squares adjacent to the enemy King.
#[derive(Clone, Debug)]
pub struct ThreatMap {
    counts: [[[u16; 8]; 8]; 2],
    moves: [Vec<Move>; 2],
    outcome: Outcome,
}

impl ThreatMap {
    /// Build the full index for a position.
    ///
    /// Kings are processed last (White's first, then Black's) because King
    /// candidates depend on the opponent's accumulated threat.
    #[must_use]
    pub fn compute(position: &Position) -> ThreatMap {
        let mut map = ThreatMap {
            counts: [[[0; 8]; 8]; 2],
            moves: [Vec::new(), Vec::new()],
            outcome: Outcome::Ongoing,
        };

        let mut kings: [Option<Square>; 2] = [None, None];
        for (sq, color, piece) in position.board().occupied() {
            match piece {
                Piece::Pawn => map.pawn_targets(position, color, sq),
                Piece::Knight => map.knight_targets(position, color, sq),
                Piece::Rook => map.slider_targets(position, color, sq, &STRAIGHT_DIRS),
                Piece::Bishop => map.slider_targets(position, color, sq, &DIAGONAL_DIRS),
                Piece::Queen => map.slider_targets(position, color, sq, &ALL_DIRS),
                Piece::King => kings[color.index()] = Some(sq),
            }
        }
        for color in Color::BOTH {
            if let Some(sq) = kings[color.index()] {
                map.king_targets(position, color, sq);
            }
        }

        map.outcome = map.game_over(position);
        map
    }

    /// How many of `color`'s pieces attack `sq`
    #[inline]
    #[must_use]
    pub fn count(&self, color: Color, sq: Square) -> u16 {
        self.counts[color.index()][sq.row()][sq.col()]
    }

    /// True when at least one of `color`'s pieces attacks `sq`
    #[inline]
    #[must_use]
    pub fn is_threatened(&self, color: Color, sq: Square) -> bool {
        self.count(color, sq) > 0
    }

    /// Candidate moves for `color`, in generation order
    #[inline]
    #[must_use]
    pub fn moves(&self, color: Color) -> &[Move] {
        &self.moves[color.index()]
    }

    /// Terminal status determined while building the index
    #[inline]
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Record targets for one piece: every target square counts as a
    /// threat; targets not occupied by a friendly piece also become moves.
    fn add_targets(&mut self, position: &Position, color: Color, from: Square, targets: &[Square]) {
        for &sq in targets {
            self.counts[color.index()][sq.row()][sq.col()] += 1;
            if position.board().color_at(sq) != Some(color) {
                self.moves[color.index()].push(Move::new(from, sq));
            }
        }
    }
}
