//! Board grid and game position.

use std::fmt;

use super::types::{CastlingRights, Color, Move, MoveRecord, Piece, Square};

/// The back-rank piece order shared by both colors
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// An 8x8 mailbox grid of optional (color, piece) squares.
///
/// `Board` is a plain value: it is `Copy`, so every search node works on its
/// own grid and no branch ever observes another branch's mutations.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    /// An empty board
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The standard 32-piece starting setup
    #[must_use]
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            board.set(Square(0, col), Some((Color::Black, piece)));
            board.set(Square(1, col), Some((Color::Black, Piece::Pawn)));
            board.set(Square(6, col), Some((Color::White, Piece::Pawn)));
            board.set(Square(7, col), Some((Color::White, piece)));
        }
        board
    }

    /// Contents of a square
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.row()][sq.col()]
    }

    /// Overwrite a square
    #[inline]
    pub fn set(&mut self, sq: Square, contents: Option<(Color, Piece)>) {
        self.squares[sq.row()][sq.col()] = contents;
    }

    /// True when the square holds no piece
    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_none()
    }

    /// Color of the piece on a square, if any
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.get(sq).map(|(color, _)| color)
    }

    /// Pick up whatever is on `from` and drop it on `to`
    pub fn relocate(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(from, None);
        self.set(to, piece);
    }

    /// First square (row-major) holding the given color's King
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied().find_map(|(sq, c, piece)| {
            (c == color && piece == Piece::King).then_some(sq)
        })
    }

    /// Iterate occupied squares in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        (0..8).flat_map(move |row| {
            (0..8).filter_map(move |col| {
                let sq = Square(row, col);
                self.get(sq).map(|(color, piece)| (sq, color, piece))
            })
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    a b c d e f g h")?;
        for row in 0..8 {
            write!(f, "{}  ", 8 - row)?;
            for col in 0..8 {
                match self.squares[row][col] {
                    Some((color, piece)) => write!(f, " {}", piece.glyph(color))?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A full game state: board, castling rights, and move history.
///
/// Positions are only ever advanced by [`Position::apply_move`], which
/// returns a new value; nothing mutates a live position in place.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    castling: CastlingRights,
    history: Vec<MoveRecord>,
}

impl Position {
    /// Game start: standard setup, full castling rights, sentinel history
    #[must_use]
    pub fn new() -> Self {
        Position {
            board: Board::standard(),
            castling: CastlingRights::all(),
            history: vec![MoveRecord::sentinel()],
        }
    }

    /// Build a position from parts; the history gains a sentinel if empty
    #[must_use]
    pub fn from_parts(board: Board, castling: CastlingRights, history: Vec<MoveRecord>) -> Self {
        let history = if history.is_empty() {
            vec![MoveRecord::sentinel()]
        } else {
            history
        };
        Position {
            board,
            castling,
            history,
        }
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The most recent history entry (at minimum the sentinel)
    #[inline]
    #[must_use]
    pub fn last_move(&self) -> MoveRecord {
        self.history.last().copied().unwrap_or(MoveRecord::sentinel())
    }

    /// Whose turn it is, inferred from the last-moved color.
    ///
    /// The sentinel entry has no color, so a fresh game reports White.
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        match self.last_move().mover() {
            Some(Color::White) => Color::Black,
            _ => Color::White,
        }
    }

    /// Cheap copy for search roots: the grid and rights are plain values,
    /// and en passant only ever consults the latest history entry, so the
    /// older records are not carried into the search tree.
    #[must_use]
    pub fn fork(&self) -> Position {
        Position {
            board: self.board,
            castling: self.castling,
            history: vec![self.last_move()],
        }
    }

    /// Apply a move, returning the successor position.
    ///
    /// Legality is assumed to have been checked already; the piece on
    /// `from` is relocated unconditionally. Handles the castle Rook hop,
    /// en-passant victim removal, promotion to Queen on the far rank,
    /// castling-rights clearing, and the history append.
    #[must_use]
    pub fn apply_move(&self, from: Square, to: Square) -> Position {
        let mut next = self.clone();
        let moved = next.board.get(from);
        let target_was_empty = next.board.is_empty(to);

        if let Some((color, piece)) = moved {
            match piece {
                Piece::King => {
                    // Castle: the King travels two files from its home square
                    if from == Square(color.home_row(), 4)
                        && to.row() == from.row()
                        && to.col().abs_diff(from.col()) == 2
                    {
                        let row = color.home_row();
                        if to.col() == 6 {
                            next.board.relocate(Square(row, 7), Square(row, 5));
                        } else {
                            next.board.relocate(Square(row, 0), Square(row, 3));
                        }
                    }
                    next.castling.remove_both(color);
                }
                Piece::Rook => {
                    if from == Square(color.home_row(), 0) {
                        next.castling.remove(color, false);
                    } else if from == Square(color.home_row(), 7) {
                        next.castling.remove(color, true);
                    }
                }
                Piece::Pawn => {
                    if from.col() != to.col()
                        && target_was_empty
                        && self.last_move().enables_en_passant(color, to.col())
                    {
                        let victim = self.last_move().to;
                        next.board.set(victim, None);
                    }
                }
                _ => {}
            }
        }

        next.board.relocate(from, to);

        if let Some((color, Piece::Pawn)) = moved {
            if to.row() == color.promotion_row() {
                next.board.set(to, Some((color, Piece::Queen)));
            }
        }

        next.history.push(MoveRecord {
            piece: next.board.get(to),
            from,
            to,
        });
        next
    }

    /// Apply a candidate move
    #[must_use]
    pub fn apply(&self, mv: Move) -> Position {
        self.apply_move(mv.from, mv.to)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}
