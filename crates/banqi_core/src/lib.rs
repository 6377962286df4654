pub mod ai;
pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod movegen;
pub mod rules;
pub mod status;
pub mod types;

#[cfg(test)]
mod ai_tests;
#[cfg(test)]
mod rules_tests;

// Re-export core game logic (not engine-specific)
pub use ai::{capture_score, piece_value, GreedyEngine};
pub use board::*;
pub use config::GameConfig;
pub use error::*;
pub use game::*;
pub use movegen::*;
pub use rules::*;
pub use status::*;
pub use types::*;

use rand::RngCore;

// =============================================================================
// Engine trait: implemented by every AI opponent (greedy, random, ...)
// =============================================================================

/// Trait that all Banqi engines must implement.
///
/// Engines never mutate the board; they return an [`Action`] for the caller
/// to apply through [`Game::apply`].
pub trait Engine: Send {
    /// Choose an action for `side`.
    ///
    /// # Arguments
    /// * `board` - The current board
    /// * `side` - The color on move
    /// * `rng` - Source for any random choice, so seeded games replay exactly
    ///
    /// # Returns
    /// The chosen action, or [`Action::Pass`] when `side` has nothing to do
    fn select_action(&mut self, board: &Board, side: Color, rng: &mut dyn RngCore) -> Action;

    /// Returns the engine's display name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
