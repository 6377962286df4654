use banqi_core::{Board, Cell, Color, Game, GameStatus, Piece, COLS, ROWS};

/// Two-character token for a cell: `##` face down, `.` empty, otherwise the
/// layout letter (uppercase Red, lowercase Black).
pub fn piece_token(pc: Option<Piece>) -> String {
    match pc {
        None => ".".to_string(),
        Some(pc) if !pc.is_face_up() => "##".to_string(),
        Some(pc) => {
            let letter = pc.rank().letter();
            match pc.color() {
                Color::Red => letter.to_string(),
                Color::Black => letter.to_ascii_lowercase().to_string(),
            }
        }
    }
}

pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   ");
    for col in 0..COLS {
        out.push_str(&format!("{col:>3}"));
    }
    out.push('\n');
    for row in 0..ROWS as i32 {
        out.push_str(&format!("{row:>3}"));
        for col in 0..COLS as i32 {
            let pc = Cell::new(row, col).and_then(|c| board.piece_at(c));
            out.push_str(&format!("{:>3}", piece_token(pc)));
        }
        out.push('\n');
    }
    out
}

/// One-line summary of whose turn it is or who won. `vs_ai` tags the AI's
/// side.
pub fn status_line(game: &Game, vs_ai: bool) -> String {
    match game.status() {
        GameStatus::RedWins => "Red wins!".to_string(),
        GameStatus::BlackWins => "Black wins!".to_string(),
        GameStatus::Ongoing => match game.current_player() {
            None => "Flip any piece to begin.".to_string(),
            Some(side) => {
                let who = if vs_ai && game.ai_color() == Some(side) {
                    " (AI)"
                } else {
                    ""
                };
                format!("{side}{who} to move.")
            }
        },
    }
}
