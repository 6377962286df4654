//! Random Action Banqi Engine
//!
//! A simple engine that selects uniformly at random from all legal actions,
//! flips included.
//! Useful for:
//! - Baseline comparisons (the greedy engine should beat this comfortably)
//! - Stress testing action generation and terminal detection

use banqi_core::{legal_actions_into, Action, Board, Color, Engine};
use rand::seq::SliceRandom;
use rand::RngCore;


/// An engine that plays random legal actions.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    buf: Vec<Action>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(64),
        }
    }
}

impl Engine for RandomEngine {
    fn select_action(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> Action {
        legal_actions_into(board, side, &mut self.buf);
        self.buf.choose(rng).copied().unwrap_or(Action::Pass)
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }

    fn new_game(&mut self) {
        self.buf.clear();
    }
}
