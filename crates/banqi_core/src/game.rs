//! The game state machine: setup, first-flip color binding, turn
//! alternation and sticky terminal status.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    ai::GreedyEngine,
    board::Board,
    config::GameConfig,
    error::{GameError, Violation},
    movegen, rules,
    status::{self, GameStatus},
    types::*,
    Engine,
};

/// Who performed an action. Only matters for the first flip, which pairs
/// the actor with the revealed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Actor {
    Human,
    Ai,
}

/// Who opens the game in a human-vs-AI session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    #[default]
    HumanFirst,
    AiFirst,
    /// A coin toss from the game's RNG.
    Random,
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Option<Color>,
    human_color: Option<Color>,
    ai_color: Option<Color>,
    first_move_done: bool,
    status: GameStatus,
    config: GameConfig,
    rng: StdRng,
    ai: GreedyEngine,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A fresh, randomly dealt game.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        let mut rng = config.rng();
        let board = Board::shuffled(&mut rng);
        Self {
            board,
            current_player: None,
            human_color: None,
            ai_color: None,
            first_move_done: false,
            status: GameStatus::Ongoing,
            config,
            rng,
            ai: GreedyEngine::new(),
        }
    }

    /// Resume from an arbitrary position with `to_move` on move. The first
    /// flip counts as already made; no side is bound to the AI.
    pub fn from_position(board: Board, to_move: Color, config: GameConfig) -> Self {
        let status = status::evaluate(&board, config.stalemate_rule);
        Self {
            board,
            current_player: Some(to_move),
            human_color: None,
            ai_color: None,
            first_move_done: true,
            status,
            rng: config.rng(),
            config,
            ai: GreedyEngine::new(),
        }
    }

    /// Pair the AI with `color` and the human with the other side.
    pub fn with_ai_color(mut self, color: Color) -> Self {
        self.ai_color = Some(color);
        self.human_color = Some(color.other());
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn current_player(&self) -> Option<Color> {
        self.current_player
    }
    pub fn human_color(&self) -> Option<Color> {
        self.human_color
    }
    pub fn ai_color(&self) -> Option<Color> {
        self.ai_color
    }
    pub fn first_move_done(&self) -> bool {
        self.first_move_done
    }
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The piece at (row, col); `None` for empty or off-board cells.
    pub fn piece_at(&self, row: i32, col: i32) -> Option<Piece> {
        Cell::new(row, col).and_then(|cell| self.board.piece_at(cell))
    }

    /// Legality oracle for the side on move. Never mutates.
    pub fn is_legal(&self, from_row: i32, from_col: i32, to_row: i32, to_col: i32) -> bool {
        match (
            Cell::new(from_row, from_col),
            Cell::new(to_row, to_col),
            self.current_player,
        ) {
            (Some(from), Some(to), Some(side)) => rules::is_legal(&self.board, side, from, to),
            _ => false,
        }
    }

    /// Every action open to the side on move. Before the first flip that is
    /// any flip; after the game ends it is nothing.
    pub fn legal_actions(&self) -> Vec<Action> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        match self.current_player {
            Some(side) => movegen::legal_actions(&self.board, side),
            None => movegen::flip_cells(&self.board)
                .into_iter()
                .map(Action::Flip)
                .collect(),
        }
    }

    /// Human flip of the piece at (row, col).
    pub fn flip(&mut self, row: i32, col: i32) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        let cell = cell_at(row, col)?;
        self.flip_cell(cell, Actor::Human)
    }

    /// Human move from one cell to another, capturing whatever is on the
    /// destination.
    pub fn move_piece(
        &mut self,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<(), GameError> {
        self.ensure_ongoing()?;
        let from = cell_at(from_row, from_col)?;
        let to = cell_at(to_row, to_col)?;
        self.move_cells(Move::new(from, to))
    }

    /// Apply an action on behalf of `actor`. `Pass` is always accepted and
    /// changes nothing.
    pub fn apply_as(&mut self, action: Action, actor: Actor) -> Result<(), GameError> {
        match action {
            Action::Pass => Ok(()),
            Action::Flip(cell) => {
                self.ensure_ongoing()?;
                self.flip_cell(cell, actor)
            }
            Action::Move(mv) => {
                self.ensure_ongoing()?;
                self.move_cells(mv)
            }
        }
    }

    /// Apply an action chosen by the AI.
    pub fn apply(&mut self, action: Action) -> Result<(), GameError> {
        self.apply_as(action, Actor::Ai)
    }

    /// Random first flip on behalf of the AI, used when the human elects to
    /// go second. The revealed color becomes the AI's, and the turn passes
    /// to the human.
    pub fn force_opponent_first_flip(&mut self) -> Result<Cell, GameError> {
        self.ensure_ongoing()?;
        if self.first_move_done {
            return Err(Violation::FirstFlipTaken.into());
        }
        let Some(&cell) = movegen::flip_cells(&self.board).choose(&mut self.rng) else {
            return Err(Violation::NothingToFlip.into());
        };
        self.flip_cell(cell, Actor::Ai)?;
        Ok(cell)
    }

    /// Settle who opens. Returns the cell the AI flipped if the AI went first.
    pub fn start(&mut self, order: TurnOrder) -> Result<Option<Cell>, GameError> {
        self.ensure_ongoing()?;
        if self.first_move_done {
            return Err(Violation::FirstFlipTaken.into());
        }
        let ai_first = match order {
            TurnOrder::HumanFirst => false,
            TurnOrder::AiFirst => true,
            TurnOrder::Random => self.rng.gen_bool(0.5),
        };
        debug!(?order, ai_first, "turn order settled");
        if ai_first {
            self.force_opponent_first_flip().map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn is_ai_turn(&self) -> bool {
        !self.status.is_terminal()
            && self.current_player.is_some()
            && self.current_player == self.ai_color
    }

    /// The greedy AI's choice for this turn, or `Pass` when it is not the
    /// AI's turn.
    pub fn select_ai_action(&mut self) -> Action {
        let side = match self.current_player {
            Some(side) if self.is_ai_turn() => side,
            _ => return Action::Pass,
        };
        self.ai.select_action(&self.board, side, &mut self.rng)
    }

    /// Let any engine choose for the side on move, drawing randomness from
    /// this game's RNG.
    pub fn select_action_with(&mut self, engine: &mut dyn Engine) -> Action {
        match self.current_player {
            Some(side) if !self.status.is_terminal() => {
                engine.select_action(&self.board, side, &mut self.rng)
            }
            _ => Action::Pass,
        }
    }

    /// Select and apply the AI's action in one step.
    pub fn play_ai_turn(&mut self) -> Result<Action, GameError> {
        self.ensure_ongoing()?;
        if !self.is_ai_turn() {
            return Err(Violation::NotAiTurn.into());
        }
        let action = self.select_ai_action();
        self.apply(action)?;
        Ok(action)
    }

    fn ensure_ongoing(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            Err(GameError::ActionOnTerminalGame(self.status))
        } else {
            Ok(())
        }
    }

    fn flip_cell(&mut self, cell: Cell, actor: Actor) -> Result<(), GameError> {
        let pc = match self.board.piece_at(cell) {
            None => return Err(Violation::EmptyCell(cell).into()),
            Some(pc) if pc.is_face_up() => return Err(Violation::AlreadyFaceUp(cell).into()),
            Some(pc) => pc,
        };
        self.board.flip(cell);

        if !self.first_move_done {
            self.current_player = Some(pc.color());
            let (mine, theirs) = (pc.color(), pc.color().other());
            match actor {
                Actor::Human => {
                    self.human_color = Some(mine);
                    self.ai_color = Some(theirs);
                }
                Actor::Ai => {
                    self.ai_color = Some(mine);
                    self.human_color = Some(theirs);
                }
            }
            self.first_move_done = true;
            debug!(?actor, color = %mine, "first flip binds colors");
        }

        debug!(%cell, rank = ?pc.rank(), color = %pc.color(), ?actor, "flip");
        self.end_turn();
        Ok(())
    }

    fn move_cells(&mut self, mv: Move) -> Result<(), GameError> {
        let side = self.current_player.ok_or(Violation::NoTurnYet)?;
        if !rules::is_legal(&self.board, side, mv.from, mv.to) {
            return Err(Violation::IllegalMove(mv).into());
        }
        let captured = self.board.relocate(mv);
        debug!(%mv, color = %side, captured = ?captured.map(|pc| pc.rank()), "move");
        self.end_turn();
        Ok(())
    }

    fn end_turn(&mut self) {
        self.current_player = self.current_player.map(Color::other);
        if self.status.is_terminal() {
            return;
        }
        self.status = status::evaluate(&self.board, self.config.stalemate_rule);
        if let Some(winner) = self.status.winner() {
            info!(%winner, pieces_left = self.board.piece_count(), "game over");
        }
    }
}

fn cell_at(row: i32, col: i32) -> Result<Cell, GameError> {
    Cell::new(row, col).ok_or(GameError::OutOfBounds { row, col })
}
