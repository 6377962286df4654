//! Move legality.
//!
//! Everything here is a pure function of the board and the side being asked
//! about, so terminal detection can probe either color without touching the
//! game's actual turn.

use crate::{board::Board, types::*};

/// Rank dominance for an adjacent capture.
///
/// Cannons are always allowed here; their captures are decided by the screen
/// rule in [`is_legal`]. The General beats everything but the Soldier, and the
/// Soldier beats only the General and other Soldiers.
pub fn can_capture(attacker: Rank, defender: Rank) -> bool {
    match attacker {
        Rank::Cannon => true,
        Rank::General => defender != Rank::Soldier,
        Rank::Soldier => matches!(defender, Rank::General | Rank::Soldier),
        _ => attacker.order() <= defender.order(),
    }
}

/// Occupied cells strictly between `from` and `to`, or `None` when the two
/// cells do not share a row or column.
pub fn pieces_between(board: &Board, from: Cell, to: Cell) -> Option<usize> {
    let (dr, dc) = (to.row() - from.row(), to.col() - from.col());
    if (dr != 0 && dc != 0) || (dr == 0 && dc == 0) {
        return None;
    }

    let (step_r, step_c) = (dr.signum(), dc.signum());
    let mut count = 0;
    let (mut r, mut c) = (from.row() + step_r, from.col() + step_c);
    while (r, c) != (to.row(), to.col()) {
        let cell = Cell::new(r, c).expect("cells between two board cells are on the board");
        if !board.is_empty(cell) {
            count += 1;
        }
        r += step_r;
        c += step_c;
    }
    Some(count)
}

/// Whether `side` may move the piece at `from` onto `to`.
pub fn is_legal(board: &Board, side: Color, from: Cell, to: Cell) -> bool {
    let mover = match board.piece_at(from) {
        Some(pc) if pc.is_face_up() && pc.color() == side => pc,
        _ => return false,
    };

    match board.piece_at(to) {
        None => {
            if mover.rank() == Rank::Cannon {
                pieces_between(board, from, to) == Some(0)
            } else {
                from.manhattan(to) == 1
            }
        }
        Some(target) => {
            if !target.is_face_up() || target.color() == mover.color() {
                return false;
            }
            if mover.rank() == Rank::Cannon {
                pieces_between(board, from, to) == Some(1)
            } else {
                from.manhattan(to) == 1 && can_capture(mover.rank(), target.rank())
            }
        }
    }
}
