//! Depth-limited minimax with alpha-beta and forward pruning.

use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use crate::clock::Deadline;

use super::super::eval::{evaluate_with, Weights};
use super::super::state::Position;
use super::super::threat::{Outcome, ThreatMap};
use super::super::types::{Color, Move};
use super::{FORWARD_PRUNE_THRESHOLD, INFINITY};

/// State threaded through one search: the weight vector, the deadline, the
/// RNG for provisional move picks, and a node counter.
pub(crate) struct SearchContext<'a> {
    pub(crate) weights: &'a Weights,
    pub(crate) deadline: Deadline,
    pub(crate) rng: ThreadRng,
    pub(crate) nodes: u64,
}

impl SearchContext<'_> {
    /// Minimax over `position` with `color` to move. Black maximizes,
    /// White minimizes.
    ///
    /// Returns `None` when the deadline has expired: the cancellation
    /// sentinel, which propagates up unevaluated so the driver can discard
    /// the whole depth. Otherwise returns the node value and the best move
    /// (`None` at leaf and terminal nodes). Ties keep the earliest-scanned
    /// move; before any child is scored the best move is a uniformly random
    /// candidate.
    pub(crate) fn minimax(
        &mut self,
        position: &Position,
        color: Color,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> Option<(i32, Option<Move>)> {
        if self.deadline.expired() {
            return None;
        }
        self.nodes += 1;

        let threats = ThreatMap::compute(position);

        if depth == 0 || threats.outcome() != Outcome::Ongoing {
            if self.deadline.expired() {
                return None;
            }
            return Some((evaluate_with(position, self.weights), None));
        }

        let mut candidates: Vec<Move> = threats.moves(color).to_vec();
        if candidates.len() > FORWARD_PRUNE_THRESHOLD {
            candidates = self.forward_prune(position, color, candidates);
        }

        // A color can run out of candidates without the terminal heuristic
        // noticing (it only examines the side whose turn it infers); score
        // such a node statically
        let Some(&provisional) = candidates.choose(&mut self.rng) else {
            return Some((evaluate_with(position, self.weights), None));
        };
        let mut best_move = provisional;

        if color == Color::White {
            let mut value = INFINITY;
            for &m in &candidates {
                let child = position.apply(m);
                if self.deadline.expired() {
                    return None;
                }
                let (child_value, _) =
                    self.minimax(&child, Color::Black, depth - 1, alpha, beta)?;
                if value > child_value {
                    value = child_value;
                    best_move = m;
                }
                if value < beta {
                    beta = value;
                }
                if alpha >= beta {
                    break;
                }
            }
            if self.deadline.expired() {
                return None;
            }
            Some((value, Some(best_move)))
        } else {
            let mut value = -INFINITY;
            for &m in &candidates {
                let child = position.apply(m);
                if self.deadline.expired() {
                    return None;
                }
                let (child_value, _) =
                    self.minimax(&child, Color::White, depth - 1, alpha, beta)?;
                if value < child_value {
                    value = child_value;
                    best_move = m;
                }
                if value > alpha {
                    alpha = value;
                }
                if alpha >= beta {
                    break;
                }
            }
            if self.deadline.expired() {
                return None;
            }
            Some((value, Some(best_move)))
        }
    }

    /// Statically score every child position, then keep only the better
    /// half of the candidates for recursive search.
    fn forward_prune(
        &mut self,
        position: &Position,
        color: Color,
        candidates: Vec<Move>,
    ) -> Vec<Move> {
        let scored = candidates
            .into_iter()
            .map(|m| (evaluate_with(&position.apply(m), self.weights), m))
            .collect();
        select_better_half(scored, color)
    }
}

/// Keep the better half of statically scored moves: the high-scoring half
/// for the maximizer (Black), the low half for the minimizer (White). The
/// sort is stable, so equal scores keep their generation order.
pub(crate) fn select_better_half(mut scored: Vec<(i32, Move)>, color: Color) -> Vec<Move> {
    scored.sort_by_key(|&(value, _)| value);
    let half = scored.len() / 2;
    let kept = match color {
        Color::Black => &scored[half..],
        Color::White => &scored[..half],
    };
    kept.iter().map(|&(_, m)| m).collect()
}
