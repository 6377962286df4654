use crate::{board::Board, rules::is_legal, types::*};

/// Every legal action for `side`: flips first, then captures, then quiet
/// moves. Returns a freshly allocated vector.
pub fn legal_actions(board: &Board, side: Color) -> Vec<Action> {
    let mut out = Vec::with_capacity(64);
    legal_actions_into(board, side, &mut out);
    out
}

/// Generate all legal actions into the provided buffer, reusing it across calls.
pub fn legal_actions_into(board: &Board, side: Color, out: &mut Vec<Action>) {
    out.clear();
    out.extend(flip_cells(board).into_iter().map(Action::Flip));

    let mut moves = Vec::with_capacity(32);
    captures_into(board, side, &mut moves);
    quiet_moves_into(board, side, &mut moves);
    out.extend(moves.into_iter().map(Action::Move));
}

/// Face-down cells in row-major order.
pub fn flip_cells(board: &Board) -> Vec<Cell> {
    board
        .pieces()
        .filter(|(_, pc)| !pc.is_face_up())
        .map(|(cell, _)| cell)
        .collect()
}

/// Legal captures for `side`, ordered by attacker then target, both
/// row-major.
pub fn captures(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::new();
    captures_into(board, side, &mut out);
    out
}

/// Legal moves onto empty cells for `side`, in the same order as [`captures`].
pub fn quiet_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut out = Vec::new();
    quiet_moves_into(board, side, &mut out);
    out
}

fn captures_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    gen_moves(board, side, out, |b, to| !b.is_empty(to));
}

fn quiet_moves_into(board: &Board, side: Color, out: &mut Vec<Move>) {
    gen_moves(board, side, out, |b, to| b.is_empty(to));
}

fn gen_moves(
    board: &Board,
    side: Color,
    out: &mut Vec<Move>,
    wanted: impl Fn(&Board, Cell) -> bool,
) {
    for (from, pc) in board.pieces() {
        if !pc.is_face_up() || pc.color() != side {
            continue;
        }
        for to in Cell::all() {
            if wanted(board, to) && is_legal(board, side, from, to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

/// Whether any face-up piece of `side` has a legal destination anywhere.
pub fn has_piece_move(board: &Board, side: Color) -> bool {
    board
        .pieces()
        .filter(|(_, pc)| pc.is_face_up() && pc.color() == side)
        .any(|(from, _)| Cell::all().any(|to| is_legal(board, side, from, to)))
}
