use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ParseBoardError;
use crate::types::*;

/// The 4x8 grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; NUM_CELLS],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [None; NUM_CELLS],
        }
    }

    /// All 32 pieces face down in a uniformly random arrangement.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut pieces = full_set();
        pieces.shuffle(rng);

        let mut b = Board::empty();
        for (slot, pc) in b.cells.iter_mut().zip(pieces) {
            *slot = Some(pc);
        }
        b
    }

    /// Parse the compact layout notation: four rows top to bottom separated
    /// by `/`, uppercase letters for Red, lowercase for Black, a `~` prefix
    /// for a face-down piece and digits for runs of empty cells.
    ///
    /// `"S~g6/8/8/7c"` puts a face-up Red Soldier at (0, 0), a face-down
    /// Black General at (0, 1) and a face-up Black Cannon at (3, 7).
    pub fn from_layout(layout: &str) -> Result<Self, ParseBoardError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != ROWS {
            return Err(ParseBoardError::RowCount(rows.len()));
        }

        let mut b = Board::empty();
        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut face_down = false;
            for ch in row_str.chars() {
                if face_down && !ch.is_ascii_alphabetic() {
                    return Err(ParseBoardError::DanglingMarker(row));
                }
                match ch {
                    '~' => face_down = true,
                    '1'..='8' => col += ch as usize - '0' as usize,
                    _ => {
                        let rank =
                            Rank::from_letter(ch).ok_or(ParseBoardError::BadChar { row, ch })?;
                        let color = if ch.is_ascii_uppercase() {
                            Color::Red
                        } else {
                            Color::Black
                        };
                        if col >= COLS {
                            return Err(ParseBoardError::ColumnCount { row, cols: col + 1 });
                        }
                        let pc = if face_down {
                            Piece::new(rank, color)
                        } else {
                            Piece::revealed(rank, color)
                        };
                        b.cells[row * COLS + col] = Some(pc);
                        col += 1;
                        face_down = false;
                    }
                }
            }
            if face_down {
                return Err(ParseBoardError::DanglingMarker(row));
            }
            if col != COLS {
                return Err(ParseBoardError::ColumnCount { row, cols: col });
            }
        }
        Ok(b)
    }

    /// Inverse of [`Board::from_layout`].
    pub fn to_layout(&self) -> String {
        let mut out = String::new();
        for row in 0..ROWS {
            if row > 0 {
                out.push('/');
            }
            let mut gap = 0;
            for col in 0..COLS {
                match self.cells[row * COLS + col] {
                    None => gap += 1,
                    Some(pc) => {
                        if gap > 0 {
                            out.push_str(&gap.to_string());
                            gap = 0;
                        }
                        if !pc.is_face_up() {
                            out.push('~');
                        }
                        let letter = pc.rank().letter();
                        out.push(match pc.color() {
                            Color::Red => letter,
                            Color::Black => letter.to_ascii_lowercase(),
                        });
                    }
                }
            }
            if gap > 0 {
                out.push_str(&gap.to_string());
            }
        }
        out
    }

    pub fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.cells[cell.index()]
    }
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cells[cell.index()].is_none()
    }

    /// Reveal the piece at `cell`. Returns the revealed piece, or `None` if
    /// the cell was empty or already face up.
    pub fn flip(&mut self, cell: Cell) -> Option<Piece> {
        match &mut self.cells[cell.index()] {
            Some(pc) if !pc.is_face_up() => {
                pc.flip();
                Some(*pc)
            }
            _ => None,
        }
    }

    /// Relocate the piece at `mv.from` onto `mv.to`, returning whatever was
    /// captured there. No legality checks.
    pub fn relocate(&mut self, mv: Move) -> Option<Piece> {
        let moved = self.cells[mv.from.index()].take();
        std::mem::replace(&mut self.cells[mv.to.index()], moved)
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.cells.iter().enumerate().filter_map(|(i, pc)| {
            let pc = (*pc)?;
            let cell = Cell::from_index(i).expect("board index within grid");
            Some((cell, pc))
        })
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    pub fn count_of(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|pc| pc.color() == color)
            .count()
    }

    pub fn has_face_down(&self) -> bool {
        self.cells.iter().flatten().any(|pc| !pc.is_face_up())
    }

    pub fn has_face_down_of(&self, color: Color) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|pc| !pc.is_face_up() && pc.color() == color)
    }
}

/// The 16 pieces of each side, face down.
pub fn full_set() -> Vec<Piece> {
    let mut pieces = Vec::with_capacity(NUM_CELLS);
    for color in Color::ALL {
        for rank in Rank::ALL {
            for _ in 0..rank.count_per_side() {
                pieces.push(Piece::new(rank, color));
            }
        }
    }
    debug_assert_eq!(pieces.len(), NUM_CELLS);
    pieces
}
