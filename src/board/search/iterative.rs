//! Iterative-deepening driver.

use crate::clock::Deadline;

use super::super::error::SearchError;
use super::super::eval::Weights;
use super::super::state::Position;
use super::super::types::{Color, Move};
use super::{SearchContext, INFINITY, START_DEPTH};

/// Pick a move for `color` with the default weight vector.
///
/// See [`choose_move_with`].
pub fn choose_move(
    position: &Position,
    color: Color,
    max_depth: u32,
    deadline: Deadline,
) -> Result<(i32, Move), SearchError> {
    choose_move_with(position, color, max_depth, deadline, &Weights::DEFAULT)
}

/// Pick a move for `color` by iterative deepening.
///
/// Searches depth 2 first, then re-searches one ply deeper up to
/// `max_depth`, keeping the result of the deepest search that completed
/// before the deadline. A depth cancelled mid-search is discarded whole.
///
/// Errors only when no move can be returned at all: the deadline expired
/// before depth 2 finished, or the root has no candidate moves.
pub fn choose_move_with(
    position: &Position,
    color: Color,
    max_depth: u32,
    deadline: Deadline,
    weights: &Weights,
) -> Result<(i32, Move), SearchError> {
    let root = position.fork();
    let mut ctx = SearchContext {
        weights,
        deadline,
        rng: rand::thread_rng(),
        nodes: 0,
    };

    let mut best: Option<(i32, Move)> = None;
    let mut depth = START_DEPTH;
    while depth <= max_depth {
        match ctx.minimax(&root, color, depth, -INFINITY, INFINITY) {
            Some((value, Some(m))) => {
                best = Some((value, m));
                #[cfg(feature = "logging")]
                log::debug!(
                    "depth {depth} complete for {color}: value {value}, move {m}, {} nodes",
                    ctx.nodes
                );
            }
            Some((_, None)) => {
                // Terminal root or a root with no candidates
                return Err(SearchError::NoMoves);
            }
            None => {
                #[cfg(feature = "logging")]
                log::debug!("depth {depth} cancelled at the deadline after {} nodes", ctx.nodes);
                break;
            }
        }
        if ctx.deadline.expired() {
            break;
        }
        depth += 1;
    }

    best.ok_or(SearchError::OutOfTime { depth: START_DEPTH })
}
