//! Terminal-state detection: missing King, checkmate heuristic, stalemate,
//! insufficient material.

use super::super::state::{Board, Position};
use super::super::types::{Color, Piece, Square, ALL_DIRS};
use super::{Outcome, ThreatMap};

impl ThreatMap {
    /// Decide the terminal status of the position this map was built from.
    ///
    /// A missing King ends the game immediately (malformed intermediate
    /// states degrade to a loss instead of a crash). Checkmate is a
    /// heuristic — escape squares, capture-the-checker, interpose — not a
    /// full legal-move scan; rare discovered- or double-check positions may
    /// be misjudged. It is kept as-is so move selection stays stable.
    pub(super) fn game_over(&self, position: &Position) -> Outcome {
        let board = position.board();
        if board.king_square(Color::Black).is_none() {
            return Outcome::WhiteWins;
        }
        if board.king_square(Color::White).is_none() {
            return Outcome::BlackWins;
        }

        if self.is_mated(position, Color::Black) {
            Outcome::WhiteWins
        } else if self.is_mated(position, Color::White) {
            Outcome::BlackWins
        } else if self.is_tie(position) {
            Outcome::Tie
        } else {
            Outcome::Ongoing
        }
    }

    /// Checkmate heuristic against `defender`.
    fn is_mated(&self, position: &Position, defender: Color) -> bool {
        let attacker = defender.opponent();
        let board = position.board();
        let Some(king) = board.king_square(defender) else {
            return false;
        };

        if !self.is_threatened(attacker, king) {
            return false;
        }

        // Any neighbor not held by the defender and not under attack is an
        // escape
        for &(dr, dc) in &ALL_DIRS {
            let Some(sq) = king.offset(dr, dc) else { continue };
            if board.color_at(sq) != Some(defender) && !self.is_threatened(attacker, sq) {
                return false;
            }
        }

        // Can the checking piece be captured? A King capture only counts
        // when the checker's square is unprotected.
        let checker = self
            .moves(attacker)
            .iter()
            .find(|m| m.to == king)
            .map(|m| m.from);

        if let Some(checker) = checker {
            for m in self.moves(defender) {
                if m.to != checker {
                    continue;
                }
                let king_capture = board.get(m.from) == Some((defender, Piece::King));
                if !king_capture || !self.is_threatened(attacker, checker) {
                    return false;
                }
            }

            // Against a sliding checker, any defender move (other than the
            // King's own) onto the attack ray blocks the check
            if let Some((c, piece)) = board.get(checker) {
                if c == attacker && piece.is_slider() {
                    let ray = attack_ray(king, checker);
                    for m in self.moves(defender) {
                        if m.from != king && ray.contains(&m.to) {
                            return false;
                        }
                    }
                }
            }
        }

        true
    }

    fn is_tie(&self, position: &Position) -> bool {
        self.is_stalemate(position) || insufficient_material(position.board())
    }

    /// The side to move (opponent of the last mover) has no candidate
    /// moves. Before any real move the sentinel entry has no color and
    /// Black's list is the one examined.
    fn is_stalemate(&self, position: &Position) -> bool {
        match position.last_move().mover() {
            Some(Color::Black) => self.moves(Color::White).is_empty(),
            _ => self.moves(Color::Black).is_empty(),
        }
    }
}

/// Squares of the checker's attack ray from the King (inclusive) up to the
/// checker (exclusive). The King's own square is part of the ray.
fn attack_ray(king: Square, checker: Square) -> Vec<Square> {
    let dr = checker.row() as isize - king.row() as isize;
    let dc = checker.col() as isize - king.col() as isize;

    fn steps(delta: isize) -> Vec<isize> {
        let mut out = Vec::new();
        let mut x = 0;
        while x != delta {
            out.push(x);
            x += delta.signum();
        }
        out
    }

    let mut ray = Vec::new();
    if dr == 0 {
        for c in steps(dc) {
            ray.push(Square(king.row(), (king.col() as isize + c) as usize));
        }
    } else if dc == 0 {
        for r in steps(dr) {
            ray.push(Square((king.row() as isize + r) as usize, king.col()));
        }
    } else {
        for (r, c) in steps(dr).into_iter().zip(steps(dc)) {
            ray.push(Square(
                (king.row() as isize + r) as usize,
                (king.col() as isize + c) as usize,
            ));
        }
    }
    ray
}

/// No pawn, queen, or rook anywhere, and no color holds two minor pieces of
/// the same kind.
fn insufficient_material(board: &Board) -> bool {
    let mut seen = [[false; 6]; 2];
    for (_, color, piece) in board.occupied() {
        match piece {
            Piece::Pawn | Piece::Queen | Piece::Rook => return false,
            _ => {
                if seen[color.index()][piece.index()] {
                    return false;
                }
                seen[color.index()][piece.index()] = true;
            }
        }
    }
    true
}
