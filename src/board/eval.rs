//! Weighted static evaluation.
//!
//! Scores are signed integers, positive favoring Black, built from material,
//! threat counts, protection/attack terms, center-control bands, and
//! distance-to-enemy-King terms, all weighted by a 44-element vector.

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::state::Position;
use super::threat::{Outcome, ThreatMap};
use super::types::{Color, Piece, Square};

/// Dominating score when Black has won
pub const BLACK_WIN_SCORE: i32 = 1_000_000;
/// Dominating score when White has won
pub const WHITE_WIN_SCORE: i32 = -1_000_000;
/// Score for a tied position
pub const TIE_SCORE: i32 = 0;

/// Fixed King-presence contribution; not part of the tunable vector
const KING_PRESENCE: f64 = 100_000.0;

/// Number of tunable weights
pub const WEIGHT_COUNT: usize = 44;

/// The evaluator's weight vector.
///
/// Index layout (never reordered):
/// - 0-4 / 5-9: Black / White material, pawn..queen;
/// - 10, 11: Black threat-count and distance-to-White-King multipliers;
///   12, 13: the White counterparts (distance to the Black King);
/// - 14-18: Black threats on own pieces, 19-23 on White pieces (the
///   enemy-Queen slot is applied five-fold);
/// - 24-28: Black center bands: row 4, row 3, rows 2/5, cols 3/4, cols 2/5;
/// - 29-33 / 34-38 / 39-43: the White protection / attack / center blocks
///   (rows pair mirrored: 39 is row 3, 40 is row 4).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weights(pub [i32; WEIGHT_COUNT]);

// Hand-written: serde provides no impls for 44-element arrays
#[cfg(feature = "serde")]
impl Serialize for Weights {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Weights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values: Vec<i32> = Vec::deserialize(deserializer)?;
        let len = values.len();
        let array: [i32; WEIGHT_COUNT] = values
            .try_into()
            .map_err(|_| de::Error::invalid_length(len, &"exactly 44 weights"))?;
        Ok(Weights(array))
    }
}

impl Weights {
    /// Built-in defaults. The White half mirrors the Black half, so the
    /// standard starting position scores exactly zero.
    pub const DEFAULT: Weights = Weights([
        2, 6, 6, 8, 1000, // black material
        2, 6, 6, 8, 1000, // white material
        3, 5, 3, 5, // threat count / king distance
        10, 6, 6, 8, 50, // black protection
        100, 4, 6, 6, 8, // black attack
        50, 15, 10, 5, 15, // black center bands
        10, 6, 6, 8, 50, // white protection
        100, 4, 6, 6, 8, // white attack
        50, 15, 10, 5, 15, // white center bands
    ]);

    /// Vector produced by the offline genetic tuner.
    pub const TRAINED: Weights = Weights([
        1019, 1228, 1222, 1449, 2934, 693, 400, 520, 615, 832, 157, 1407, 861, 1147, 786, 527,
        616, 994, 1053, 1173, 255, 713, 633, 1308, 768, 974, 612, 205, 730, 562, 1462, 742, 208,
        844, 593, 1486, 563, 1267, 586, 729, 2, 941, 990, 547,
    ]);
}

impl Default for Weights {
    fn default() -> Self {
        Weights::DEFAULT
    }
}

/// Euclidean distances between all square pairs, indexed row-major.
static KING_DISTANCE: Lazy<Box<[[f64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0.0; 64]; 64]);
    for a in 0..64 {
        for b in 0..64 {
            let dr = (a / 8) as f64 - (b / 8) as f64;
            let dc = (a % 8) as f64 - (b % 8) as f64;
            table[a][b] = (dr * dr + dc * dc).sqrt();
        }
    }
    table
});

/// Evaluate with the built-in default weights.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    evaluate_with(position, &Weights::DEFAULT)
}

/// Evaluate a position: positive favors Black.
///
/// Terminal positions short-circuit to the win/tie sentinels, which
/// dominate every non-terminal score.
#[must_use]
pub fn evaluate_with(position: &Position, weights: &Weights) -> i32 {
    let threats = ThreatMap::compute(position);
    match threats.outcome() {
        Outcome::WhiteWins => return WHITE_WIN_SCORE,
        Outcome::BlackWins => return BLACK_WIN_SCORE,
        Outcome::Tie => return TIE_SCORE,
        Outcome::Ongoing => {}
    }

    let w = &weights.0;
    let board = position.board();
    let mut h = 0.0_f64;

    let mut white_king = None;
    let mut black_king = None;
    for (sq, color, piece) in board.occupied() {
        match (color, piece) {
            (Color::Black, Piece::King) => {
                black_king = Some(sq);
                h += KING_PRESENCE;
            }
            (Color::White, Piece::King) => {
                white_king = Some(sq);
                h -= KING_PRESENCE;
            }
            (Color::Black, piece) => h += f64::from(w[piece.index()]),
            (Color::White, piece) => h -= f64::from(w[5 + piece.index()]),
        }
    }

    // Threat pressure scaled by distance to the enemy King
    if let (Some(wk), Some(bk)) = (white_king, black_king) {
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                let black_count = threats.count(Color::Black, sq);
                if black_count > 0 {
                    h += f64::from(w[10] * i32::from(black_count))
                        + KING_DISTANCE[sq.index()][wk.index()] * f64::from(w[11]);
                }
                let white_count = threats.count(Color::White, sq);
                if white_count > 0 {
                    h -= f64::from(w[12] * i32::from(white_count))
                        + KING_DISTANCE[sq.index()][bk.index()] * f64::from(w[13]);
                }
            }
        }
    }

    // Black's protection, attack, and center-control terms
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square(row, col);
            let count = i32::from(threats.count(Color::Black, sq));
            if count == 0 {
                continue;
            }
            match board.get(sq) {
                Some((Color::Black, Piece::Pawn)) => h += f64::from(w[14] * count),
                Some((Color::Black, Piece::Knight)) => h += f64::from(w[15] * count),
                Some((Color::Black, Piece::Bishop)) => h += f64::from(w[16] * count),
                Some((Color::Black, Piece::Rook)) => h += f64::from(w[17] * count),
                Some((Color::Black, Piece::Queen)) => h += f64::from(w[18] * count),
                Some((Color::White, Piece::Pawn)) => h += f64::from(w[19] * count),
                Some((Color::White, Piece::Knight)) => h += f64::from(w[20] * count),
                Some((Color::White, Piece::Bishop)) => h += f64::from(w[21] * count),
                Some((Color::White, Piece::Rook)) => h += f64::from(w[22] * count),
                Some((Color::White, Piece::Queen)) => h += f64::from(w[23] * count * 5),
                Some((Color::White, Piece::King)) => h += KING_PRESENCE,
                _ => {}
            }
            if row == 4 {
                h += f64::from(w[24] * count);
            }
            if row == 3 {
                h += f64::from(w[25] * count);
            }
            if row == 2 || row == 5 {
                h += f64::from(w[26] * count);
            }
            if col == 3 || col == 4 {
                h += f64::from(w[27] * count);
            }
            if col == 2 || col == 5 {
                h += f64::from(w[28] * count);
            }
        }
    }

    // White's mirror terms
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square(row, col);
            let count = i32::from(threats.count(Color::White, sq));
            if count == 0 {
                continue;
            }
            match board.get(sq) {
                Some((Color::White, Piece::Pawn)) => h -= f64::from(w[29] * count),
                Some((Color::White, Piece::Knight)) => h -= f64::from(w[30] * count),
                Some((Color::White, Piece::Bishop)) => h -= f64::from(w[31] * count),
                Some((Color::White, Piece::Rook)) => h -= f64::from(w[32] * count),
                Some((Color::White, Piece::Queen)) => h -= f64::from(w[33] * count),
                Some((Color::Black, Piece::Pawn)) => h -= f64::from(w[34] * count),
                Some((Color::Black, Piece::Knight)) => h -= f64::from(w[35] * count),
                Some((Color::Black, Piece::Bishop)) => h -= f64::from(w[36] * count),
                Some((Color::Black, Piece::Rook)) => h -= f64::from(w[37] * count),
                Some((Color::Black, Piece::Queen)) => h -= f64::from(w[38] * count * 5),
                Some((Color::Black, Piece::King)) => h -= KING_PRESENCE,
                _ => {}
            }
            if row == 3 {
                h -= f64::from(w[39] * count);
            }
            if row == 4 {
                h -= f64::from(w[40] * count);
            }
            if row == 2 || row == 5 {
                h -= f64::from(w[41] * count);
            }
            if col == 3 || col == 4 {
                h -= f64::from(w[42] * count);
            }
            if col == 2 || col == 5 {
                h -= f64::from(w[43] * count);
            }
        }
    }

    h.round() as i32
}
