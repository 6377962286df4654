//! Terminal-state detection.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{board::Board, movegen::has_piece_move, types::Color};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    Ongoing,
    RedWins,
    BlackWins,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Ongoing
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Ongoing => None,
            GameStatus::RedWins => Some(Color::Red),
            GameStatus::BlackWins => Some(Color::Black),
        }
    }

    /// The status in which `color` has won.
    pub fn won_by(color: Color) -> GameStatus {
        match color {
            Color::Red => GameStatus::RedWins,
            Color::Black => GameStatus::BlackWins,
        }
    }
}

/// Which face-down pieces keep a side from being stalemated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalemateRule {
    /// Any face-down piece anywhere on the board. A flip of either color's
    /// piece is open to whoever is on move, so while one exists neither side
    /// is out of actions.
    #[default]
    AnyFaceDown,
    /// Only the tested side's own face-down pieces count.
    OwnFaceDown,
}

/// Whether `color` has no action available, probing the board as if it were
/// `color`'s turn.
pub fn has_no_moves(board: &Board, color: Color, rule: StalemateRule) -> bool {
    let shielded = match rule {
        StalemateRule::AnyFaceDown => board.has_face_down(),
        StalemateRule::OwnFaceDown => board.has_face_down_of(color),
    };
    if shielded {
        return false;
    }
    if board.count_of(color) == 0 {
        return true;
    }
    !has_piece_move(board, color)
}

/// Recompute the status of a board. Red is checked before Black, so if both
/// sides are stuck Black is the winner.
pub fn evaluate(board: &Board, rule: StalemateRule) -> GameStatus {
    if has_no_moves(board, Color::Red, rule) {
        trace!("red has no moves");
        GameStatus::BlackWins
    } else if has_no_moves(board, Color::Black, rule) {
        trace!("black has no moves");
        GameStatus::RedWins
    } else {
        GameStatus::Ongoing
    }
}
