//! Board model, move legality, threat index, evaluation, and search.
//!
//! # Example
//! ```
//! use chess_ai::board::{choose_move, Color, Position};
//! use chess_ai::clock::Deadline;
//!
//! let position = Position::new();
//! let (value, mv) = choose_move(&position, Color::White, 2, Deadline::unbounded())
//!     .expect("the starting position has moves");
//! println!("best {mv} valued {value}");
//! let _next = position.apply(mv);
//! ```

mod error;
mod eval;
mod rules;
mod search;
mod state;
mod threat;
mod types;

#[cfg(test)]
mod tests;

pub use error::{SearchError, SquareError};
pub use eval::{
    evaluate, evaluate_with, Weights, BLACK_WIN_SCORE, TIE_SCORE, WEIGHT_COUNT, WHITE_WIN_SCORE,
};
pub use search::{choose_move, choose_move_with, DEFAULT_MAX_DEPTH};
pub use state::{Board, Position};
pub use threat::{Outcome, ThreatMap};
pub use types::{CastlingRights, Color, Move, MoveRecord, Piece, Square};
