//! Interactive play loop: reads commands, forwards them to the engine and
//! paces the AI's turns.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::{bail, Result};
use banqi_core::{Action, Game, GameConfig, GameError};
use random_engine::RandomEngine;
use thiserror::Error;
use tracing::info;

use crate::render::{render_board, status_line};
use crate::settings::{EngineKind, Mode, Settings};

const HELP: &str = "\
Commands:
  flip R C          reveal the piece at row R, column C   (alias: f)
  move R C R2 C2    move or capture                        (alias: m)
  board             redraw the board                       (alias: b)
  actions           list every legal action
  new               start a new game
  quit              leave                                   (alias: q)
Rows are 0-3, columns 0-7. ## is face down, uppercase is Red, lowercase Black.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Flip(i32, i32),
    Move(i32, i32, i32, i32),
    Board,
    Actions,
    New,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}")]
    Unknown(String),
    #[error("{cmd} takes {expected} numbers")]
    Arity { cmd: &'static str, expected: usize },
    #[error("{0:?} is not a number")]
    BadNumber(String),
}

fn numbers<const N: usize>(cmd: &'static str, args: &[&str]) -> Result<[i32; N], CommandError> {
    if args.len() != N {
        return Err(CommandError::Arity { cmd, expected: N });
    }
    let mut out = [0; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg
            .parse()
            .map_err(|_| CommandError::BadNumber(arg.to_string()))?;
    }
    Ok(out)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&head, args)) = parts.split_first() else {
            return Err(CommandError::Empty);
        };
        match head.to_lowercase().as_str() {
            "flip" | "f" => {
                let [r, c] = numbers("flip", args)?;
                Ok(Command::Flip(r, c))
            }
            "move" | "m" => {
                let [r, c, r2, c2] = numbers("move", args)?;
                Ok(Command::Move(r, c, r2, c2))
            }
            "board" | "b" => Ok(Command::Board),
            "actions" => Ok(Command::Actions),
            "new" => Ok(Command::New),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(head.to_string())),
        }
    }
}

pub struct Session {
    settings: Settings,
    game: Game,
    random: RandomEngine,
    games_started: u64,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        let game = Game::with_config(settings.game);
        Self {
            settings,
            game,
            random: RandomEngine::new(),
            games_started: 0,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Deal a new game. A fixed seed is advanced per game so `new` does not
    /// replay the same deal.
    fn new_game<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let config = GameConfig {
            seed: self.settings.game.seed.map(|s| s.wrapping_add(self.games_started)),
            ..self.settings.game
        };
        self.games_started += 1;
        self.game = Game::with_config(config);
        info!(game = self.games_started, mode = ?self.settings.mode, "new game");

        if self.settings.mode == Mode::Pva {
            match self.game.start(self.settings.turn_order)? {
                Some(cell) => writeln!(out, "AI opens by flipping {cell}.")?,
                None => writeln!(out, "You go first!")?,
            }
        }
        Ok(())
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", render_board(self.game.board()))?;
        writeln!(
            out,
            "{}",
            status_line(&self.game, self.settings.mode == Mode::Pva)
        )?;
        Ok(())
    }

    fn ai_turn(&mut self) -> Result<Action, GameError> {
        match self.settings.engine {
            EngineKind::Greedy => self.game.play_ai_turn(),
            EngineKind::Random => {
                let action = self.game.select_action_with(&mut self.random);
                self.game.apply(action)?;
                Ok(action)
            }
        }
    }

    /// Play until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.new_game(out)?;
        self.show(out)?;

        let mut lines = input.lines();
        loop {
            if self.settings.mode == Mode::Pva && self.game.is_ai_turn() {
                thread::sleep(Duration::from_millis(self.settings.ai_delay_ms));
                let action = self.ai_turn()?;
                if action == Action::Pass {
                    bail!("AI found no action in an ongoing game");
                }
                writeln!(out, "AI: {action}")?;
                self.show(out)?;
                continue;
            }

            write!(out, "> ")?;
            out.flush()?;
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.execute(cmd, out)?,
                Err(e) => writeln!(out, "{e}. Type 'help' for commands.")?,
            }
        }
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<()> {
        let outcome = match cmd {
            Command::Flip(r, c) => self.game.flip(r, c),
            Command::Move(r, c, r2, c2) => self.game.move_piece(r, c, r2, c2),
            Command::Board => return self.show(out),
            Command::Actions => {
                for action in self.game.legal_actions() {
                    writeln!(out, "  {action}")?;
                }
                return Ok(());
            }
            Command::New => {
                self.new_game(out)?;
                return self.show(out);
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        match outcome {
            Ok(()) => self.show(out),
            Err(e) => {
                writeln!(out, "Invalid move: {e}")?;
                Ok(())
            }
        }
    }
}
