use thiserror::Error;

use crate::status::GameStatus;
use crate::types::{Cell, Move};

/// Why an action was refused. All of these leave the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("({row}, {col}) is off the 4x8 board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("illegal action: {0}")]
    IllegalAction(Violation),
    #[error("the game is already over ({0:?})")]
    ActionOnTerminalGame(GameStatus),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("no piece at {0}")]
    EmptyCell(Cell),
    #[error("the piece at {0} is already face up")]
    AlreadyFaceUp(Cell),
    #[error("no side is on move until the first flip")]
    NoTurnYet,
    #[error("{0} is not a legal move")]
    IllegalMove(Move),
    #[error("the first flip has already been made")]
    FirstFlipTaken,
    #[error("no face-down piece is left to flip")]
    NothingToFlip,
    #[error("it is not the AI's turn")]
    NotAiTurn,
}

impl From<Violation> for GameError {
    fn from(v: Violation) -> Self {
        GameError::IllegalAction(v)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 4 rows separated by '/', found {0}")]
    RowCount(usize),
    #[error("row {row} covers {cols} columns, expected 8")]
    ColumnCount { row: usize, cols: usize },
    #[error("unexpected character {ch:?} in row {row}")]
    BadChar { row: usize, ch: char },
    #[error("'~' in row {0} is not followed by a piece letter")]
    DanglingMarker(usize),
}
