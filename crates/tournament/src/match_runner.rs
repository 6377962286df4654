//! Match runner for playing games between engines

use banqi_core::{Action, Color, Engine, Game, GameConfig, GameError, StalemateRule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::results::{GameRecord, GameResult, MatchReport, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Plies per game before declaring a draw. Banqi has no built-in draw
    /// rule, so two engines shuffling pieces could otherwise go on forever.
    pub max_plies: u32,
    /// Base seed; game `i` is dealt from `seed + i`
    pub seed: Option<u64>,
    pub stalemate_rule: StalemateRule,
    /// Whether engine2 opens every other game
    pub alternate_first: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_plies: 400,
            seed: None,
            stalemate_rule: StalemateRule::default(),
            alternate_first: true,
        }
    }
}

impl MatchConfig {
    fn game_config(&self, game_num: u32) -> GameConfig {
        GameConfig {
            seed: self.seed.map(|s| s.wrapping_add(game_num as u64)),
            stalemate_rule: self.stalemate_rule,
        }
    }
}

/// How a single game ended, seen from the board.
#[derive(Debug, Clone, Copy)]
struct GameOutcome {
    /// Color bound to the engine that made the opening flip
    first_color: Color,
    winner: Option<Color>,
    plies: u32,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines
    ///
    /// The result is from engine1's perspective
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchReport, GameError> {
        let mut report = MatchReport::new(engine1.name(), engine2.name(), self.config.clone());

        for game_num in 0..self.config.num_games {
            let engine1_first = !self.config.alternate_first || game_num % 2 == 0;

            let outcome = if engine1_first {
                self.play_game(game_num, engine1, engine2)?
            } else {
                self.play_game(game_num, engine2, engine1)?
            };

            let engine1_color = if engine1_first {
                outcome.first_color
            } else {
                outcome.first_color.other()
            };
            let game_result = match outcome.winner {
                None => GameResult::Draw,
                Some(c) if c == engine1_color => GameResult::Win,
                Some(_) => GameResult::Loss,
            };
            report.result.record(game_result);
            report.games.push(GameRecord {
                game: game_num + 1,
                engine1_color,
                winner: outcome.winner,
                plies: outcome.plies,
            });

            let MatchResult { wins, losses, draws } = report.result;
            info!(
                game = game_num + 1,
                of = self.config.num_games,
                result = ?game_result,
                color = %engine1_color,
                plies = outcome.plies,
                "score {wins}-{losses}-{draws}"
            );
        }

        Ok(report)
    }

    /// Play a single game. `first` makes the opening flip and owns whatever
    /// color it reveals.
    fn play_game(
        &self,
        game_num: u32,
        first: &mut dyn Engine,
        second: &mut dyn Engine,
    ) -> Result<GameOutcome, GameError> {
        let mut game = Game::with_config(self.config.game_config(game_num));
        first.new_game();
        second.new_game();

        let opening = game.force_opponent_first_flip()?;
        let first_color = game
            .ai_color()
            .expect("forced first flip binds the opening color");
        debug!(%opening, color = %first_color, "opening flip");

        let mut plies = 1;
        while !game.status().is_terminal() && plies < self.config.max_plies {
            let Some(side) = game.current_player() else {
                break;
            };
            let engine: &mut dyn Engine = if side == first_color {
                &mut *first
            } else {
                &mut *second
            };

            let action = game.select_action_with(engine);
            if action == Action::Pass {
                warn!(color = %side, "engine passed in an ongoing game");
                break;
            }
            game.apply(action)?;
            plies += 1;
        }

        Ok(GameOutcome {
            first_color,
            winner: game.status().winner(),
            plies,
        })
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    seed: u64,
) -> Result<MatchReport, GameError> {
    let config = MatchConfig {
        num_games,
        seed: Some(seed),
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}
