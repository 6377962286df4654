//! Single-ply greedy opponent.
//!
//! Policy, first non-empty category wins:
//! 1. the best-scoring capture (first found wins ties),
//! 2. a uniformly random flip,
//! 3. a uniformly random quiet move,
//! 4. pass.

use rand::seq::SliceRandom;
use rand::RngCore;
use tracing::trace;

use crate::{
    board::Board,
    movegen::{captures, flip_cells, quiet_moves},
    types::*,
    Engine,
};

/// Score bonus for a Soldier taking a General.
pub const SOLDIER_TAKES_GENERAL: i32 = 100;

/// Material value of a rank, General 6 down to Cannon 0.
pub fn piece_value(rank: Rank) -> i32 {
    6 - rank.order() as i32
}

/// Heuristic value of `attacker` capturing `defender`.
pub fn capture_score(attacker: Rank, defender: Rank) -> i32 {
    if attacker == Rank::Soldier && defender == Rank::General {
        SOLDIER_TAKES_GENERAL
    } else {
        piece_value(defender) - piece_value(attacker)
    }
}

/// Highest-scoring capture; earlier candidates win ties.
pub fn best_capture(board: &Board, candidates: &[Move]) -> Option<(Move, i32)> {
    let mut best: Option<(Move, i32)> = None;
    for &mv in candidates {
        let (Some(attacker), Some(defender)) = (board.piece_at(mv.from), board.piece_at(mv.to))
        else {
            continue;
        };
        let score = capture_score(attacker.rank(), defender.rank());
        if best.map_or(true, |(_, s)| score > s) {
            best = Some((mv, score));
        }
    }
    best
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for GreedyEngine {
    fn select_action(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> Action {
        let caps = captures(board, side);
        if let Some((mv, score)) = best_capture(board, &caps) {
            trace!(candidates = caps.len(), score, "greedy capture");
            return Action::Move(mv);
        }

        let flips = flip_cells(board);
        if let Some(&cell) = flips.choose(rng) {
            trace!(candidates = flips.len(), "greedy flip");
            return Action::Flip(cell);
        }

        let quiet = quiet_moves(board, side);
        if let Some(&mv) = quiet.choose(rng) {
            trace!(candidates = quiet.len(), "greedy quiet move");
            return Action::Move(mv);
        }

        Action::Pass
    }

    fn name(&self) -> &str {
        "Greedy v1.0"
    }
}
