//! Threat-map driven chess AI core.
//!
//! The engine models the game as a mailbox [`board::Position`], derives a
//! per-color [`board::ThreatMap`] (attacked squares with multiplicity plus
//! candidate moves and terminal status), scores positions with a weighted
//! static evaluator, and picks moves with an iterative-deepening alpha-beta
//! search bounded by a wall-clock [`clock::Deadline`].

pub mod board;
pub mod clock;

pub use board::{
    choose_move, choose_move_with, evaluate, evaluate_with, Board, CastlingRights, Color, Move,
    MoveRecord, Outcome, Piece, Position, SearchError, Square, ThreatMap, Weights,
    BLACK_WIN_SCORE, DEFAULT_MAX_DEPTH, TIE_SCORE, WEIGHT_COUNT, WHITE_WIN_SCORE,
};
pub use clock::Deadline;
