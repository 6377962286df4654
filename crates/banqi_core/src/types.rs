use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const ROWS: usize = 4;
pub const COLS: usize = 8;
pub const NUM_CELLS: usize = ROWS * COLS;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}
impl Color {
    pub const ALL: [Color; 2] = [Color::Red, Color::Black];

    pub fn other(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    General,
    Advisor,
    Elephant,
    Chariot,
    Horse,
    Soldier,
    Cannon,
}

impl Rank {
    pub const ALL: [Rank; 7] = [
        Rank::General,
        Rank::Advisor,
        Rank::Elephant,
        Rank::Chariot,
        Rank::Horse,
        Rank::Soldier,
        Rank::Cannon,
    ];

    /// Position in the capture order, 0 being the strongest.
    ///
    /// Spelled out rather than derived from declaration order so reordering
    /// the variants can never change who captures whom.
    pub const fn order(self) -> u8 {
        match self {
            Rank::General => 0,
            Rank::Advisor => 1,
            Rank::Elephant => 2,
            Rank::Chariot => 3,
            Rank::Horse => 4,
            Rank::Soldier => 5,
            Rank::Cannon => 6,
        }
    }

    /// Number of pieces of this rank each side starts with.
    pub const fn count_per_side(self) -> usize {
        match self {
            Rank::General => 1,
            Rank::Soldier => 5,
            _ => 2,
        }
    }

    /// Layout letter (uppercase).
    pub const fn letter(self) -> char {
        match self {
            Rank::General => 'G',
            Rank::Advisor => 'A',
            Rank::Elephant => 'E',
            Rank::Chariot => 'R',
            Rank::Horse => 'H',
            Rank::Soldier => 'S',
            Rank::Cannon => 'C',
        }
    }

    pub fn from_letter(ch: char) -> Option<Rank> {
        Rank::ALL
            .into_iter()
            .find(|r| r.letter() == ch.to_ascii_uppercase())
    }
}

/// A single Banqi piece. Rank and color are fixed at creation; the only
/// transition is face-down to face-up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    rank: Rank,
    color: Color,
    face_up: bool,
}

impl Piece {
    /// A face-down piece, as dealt at setup.
    pub fn new(rank: Rank, color: Color) -> Self {
        Self {
            rank,
            color,
            face_up: false,
        }
    }

    /// An already revealed piece.
    pub fn revealed(rank: Rank, color: Color) -> Self {
        Self {
            rank,
            color,
            face_up: true,
        }
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn color(&self) -> Color {
        self.color
    }
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn flip(&mut self) {
        self.face_up = true;
    }
}

/// A cell on the 4x8 board. Only in-bounds cells can be constructed, and
/// deserialization goes through the same bounds check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

/// Unchecked wire form of [`Cell`].
#[derive(Deserialize)]
struct RawCell {
    row: i32,
    col: i32,
}

impl TryFrom<RawCell> for Cell {
    type Error = GameError;

    fn try_from(raw: RawCell) -> Result<Self, Self::Error> {
        Cell::new(raw.row, raw.col).ok_or(GameError::OutOfBounds {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Option<Cell> {
        if (0..ROWS as i32).contains(&row) && (0..COLS as i32).contains(&col) {
            Some(Cell {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn from_index(idx: usize) -> Option<Cell> {
        if idx < NUM_CELLS {
            Some(Cell {
                row: (idx / COLS) as u8,
                col: (idx % COLS) as u8,
            })
        } else {
            None
        }
    }

    pub fn row(self) -> i32 {
        self.row as i32
    }
    pub fn col(self) -> i32 {
        self.col as i32
    }
    pub fn index(self) -> usize {
        self.row as usize * COLS + self.col as usize
    }

    pub fn manhattan(self, other: Cell) -> i32 {
        (self.row() - other.row()).abs() + (self.col() - other.col()).abs()
    }

    /// Every cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..NUM_CELLS).filter_map(Cell::from_index)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
}

impl Move {
    pub fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// One turn's worth of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Flip(Cell),
    Move(Move),
    Pass,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Flip(cell) => write!(f, "flip {cell}"),
            Action::Move(mv) => write!(f, "move {mv}"),
            Action::Pass => f.write_str("pass"),
        }
    }
}
