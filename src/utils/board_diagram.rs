//! Text diagram to `GameState` parser.
//!
//! A diagram is eight rows of eight characters, rank 8 first. Uppercase
//! `KQRBNP` are White, lowercase are Black, `.` is an empty square. Side to
//! move and castling rights are passed separately since a diagram has no
//! field for them; the en-passant target always starts empty.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_board_diagram(
    rows: &[&str; 8],
    side_to_move: Color,
    castling_rights: CastlingRights,
) -> ChessResult<GameState> {
    let mut placements = Vec::with_capacity(32);

    for (row, text) in rows.iter().enumerate() {
        let cells: Vec<char> = text.chars().collect();
        if cells.len() != 8 {
            return Err(ChessError::InvalidPlacement(format!(
                "diagram row {row} must have 8 cells, got {}",
                cells.len()
            )));
        }

        for (col, ch) in cells.into_iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let piece = piece_from_char(ch).ok_or_else(|| {
                ChessError::InvalidPlacement(format!("unknown diagram piece '{ch}'"))
            })?;
            placements.push((Square::at(row as u8, col as u8), piece));
        }
    }

    GameState::from_placements(side_to_move, &placements, castling_rights)
}

/// Inverse of [`parse_board_diagram`] for the board part.
pub fn board_to_diagram(game_state: &GameState) -> [String; 8] {
    std::array::from_fn(|row| {
        (0..8u8)
            .map(|col| match game_state.piece_at(Square::at(row as u8, col)) {
                Some(piece) => piece_to_char(piece),
                None => '.',
            })
            .collect()
    })
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'k' => PieceKind::King,
        'q' => PieceKind::Queen,
        'r' => PieceKind::Rook,
        'b' => PieceKind::Bishop,
        'n' => PieceKind::Knight,
        'p' => PieceKind::Pawn,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

fn piece_to_char(piece: Piece) -> char {
    let letter = piece.kind.letter();
    match piece.color {
        Color::White => letter.to_ascii_uppercase(),
        Color::Black => letter,
    }
}
