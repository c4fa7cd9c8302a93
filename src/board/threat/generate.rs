//! Per-kind threat and candidate-move generation.

use super::super::state::Position;
use super::super::types::{Color, Move, Piece, Square, ALL_DIRS, KNIGHT_OFFSETS};
use super::ThreatMap;

impl ThreatMap {
    /// Pawns threaten their forward diagonals only; forward pushes are
    /// candidate moves but never threats. A pawn standing on either
    /// promotion rank is treated as the Queen it becomes.
    pub(super) fn pawn_targets(&mut self, position: &Position, color: Color, from: Square) {
        if from.row() == 0 || from.row() == 7 {
            self.slider_targets(position, color, from, &ALL_DIRS);
            return;
        }

        let dir = color.pawn_direction();
        let board = position.board();

        for dc in [-1, 1] {
            let Some(sq) = from.offset(dir, dc) else { continue };
            self.counts[color.index()][sq.row()][sq.col()] += 1;
            if board.color_at(sq) == Some(color.opponent()) {
                self.moves[color.index()].push(Move::new(from, sq));
            }
        }

        // Forward pushes: one square always, two from the start row
        if let Some(ahead) = from.offset(dir, 0) {
            if board.is_empty(ahead) {
                self.moves[color.index()].push(Move::new(from, ahead));
                if from.row() == color.pawn_start_row() {
                    if let Some(two_ahead) = from.offset(2 * dir, 0) {
                        if board.is_empty(two_ahead) {
                            self.moves[color.index()].push(Move::new(from, two_ahead));
                        }
                    }
                }
            }
        }
    }

    pub(super) fn knight_targets(&mut self, position: &Position, color: Color, from: Square) {
        let mut targets = Vec::with_capacity(8);
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(sq) = from.offset(dr, dc) {
                targets.push(sq);
            }
        }
        self.add_targets(position, color, from, &targets);
    }

    /// Cast rays in the given directions. A ray records every traversed
    /// square and stops at the first occupied one, except that it keeps
    /// going past the enemy King: the square behind the King stays
    /// threatened, so the King cannot retreat into its own shadow.
    pub(super) fn slider_targets(
        &mut self,
        position: &Position,
        color: Color,
        from: Square,
        dirs: &[(isize, isize)],
    ) {
        let board = position.board();
        let mut targets = Vec::new();
        for &(dr, dc) in dirs {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, dc) {
                sq = next;
                targets.push(sq);
                match board.get(sq) {
                    None => {}
                    Some((c, Piece::King)) if c != color => {}
                    Some(_) => break,
                }
            }
        }
        self.add_targets(position, color, from, &targets);
    }

    /// King candidates: the eight neighbors, minus squares the opponent
    /// already threatens and squares adjacent to the enemy King (the two
    /// Kings may never stand next to each other).
    pub(super) fn king_targets(&mut self, position: &Position, color: Color, from: Square) {
        let enemy = color.opponent();
        let board = position.board();

        let mut candidates = Vec::with_capacity(8);
        for &(dr, dc) in &ALL_DIRS {
            let Some(sq) = from.offset(dr, dc) else { continue };
            if self.is_threatened(enemy, sq) {
                continue;
            }
            candidates.push(sq);
        }
        candidates.retain(|&sq| {
            !ALL_DIRS.iter().any(|&(dr, dc)| {
                sq.offset(dr, dc)
                    .is_some_and(|n| board.get(n) == Some((enemy, Piece::King)))
            })
        });

        self.add_targets(position, color, from, &candidates);
    }
}
