//! Adversarial search: minimax with alpha-beta pruning, forward pruning of
//! wide nodes, and an iterative-deepening driver bounded by a wall-clock
//! deadline.

mod iterative;
mod minimax;

pub use iterative::{choose_move, choose_move_with};

pub(crate) use minimax::SearchContext;

#[cfg(test)]
pub(crate) use minimax::select_better_half;

/// Depth cap the reference driver searches to
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Score bound for the alpha-beta window
pub(crate) const INFINITY: i32 = i32::MAX;

/// Candidate-move count above which forward pruning discards the worse half
pub(crate) const FORWARD_PRUNE_THRESHOLD: usize = 20;

/// First depth the iterative-deepening driver attempts
pub(crate) const START_DEPTH: u32 = 2;
