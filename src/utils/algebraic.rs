//! Square and move conversions for coordinate algebraic text.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and the mailbox
//! `Square`, and renders moves as `e2e4` / `e7e8q` for logs and the CLI.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::moves::move_descriptions::ChessMove;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    // Rank 8 is row 0.
    Ok(Square::at(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}

/// Start and end squares, plus the promotion letter when there is one.
pub fn move_to_algebraic(mv: &ChessMove) -> String {
    let mut out = format!("{}{}", mv.from(), mv.to());
    if let Some(kind) = mv.promotion_piece() {
        out.push(kind.letter());
    }
    out
}

/// Parse a promotion suffix letter (`q`, `r`, `b`, `n`, either case).
pub fn promotion_from_letter(letter: char) -> Option<PieceKind> {
    match letter.to_ascii_lowercase() {
        'q' => Some(PieceKind::Queen),
        'r' => Some(PieceKind::Rook),
        'b' => Some(PieceKind::Bishop),
        'n' => Some(PieceKind::Knight),
        _ => None,
    }
}

/// Split `e2e4` / `e7e8q` into start, end and optional promotion.
pub fn parse_coordinate_move(text: &str) -> ChessResult<(Square, Square, Option<PieceKind>)> {
    let text = text.trim();
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(ChessError::IllegalMove(text.to_owned()));
    }
    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(letter) => Some(
            promotion_from_letter(letter).ok_or_else(|| ChessError::IllegalMove(text.to_owned()))?,
        ),
    };
    Ok((from, to, promotion))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::game_state::game_state::GameState;
    use crate::utils::board_diagram::parse_board_diagram;

    #[test]
    fn corner_squares_map_to_rows_and_columns() {
        let a8 = algebraic_to_square("a8").expect("a8 should parse");
        assert_eq!((a8.row(), a8.col()), (0, 0));
        let h1 = algebraic_to_square("h1").expect("h1 should parse");
        assert_eq!((h1.row(), h1.col()), (7, 7));
        let e4 = algebraic_to_square("e4").expect("e4 should parse");
        assert_eq!((e4.row(), e4.col()), (4, 4));
        assert_eq!(square_to_algebraic(e4), "e4");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e9", "i1", "e44", "E4"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraicSquare(bad.to_owned()))
            );
        }
    }

    #[test]
    fn moves_render_with_promotion_suffix() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        let lan: Vec<String> = moves.iter().map(move_to_algebraic).collect();
        assert!(lan.contains(&"e2e4".to_owned()));
        assert!(lan.contains(&"g1f3".to_owned()));

        let rows = [
            "....k...", "P.......", "........", "........", "........", "........", "........",
            "....K...",
        ];
        let mut game = parse_board_diagram(&rows, Color::White, CastlingRights::NONE)
            .expect("diagram should parse");
        let mut lan: Vec<String> = game
            .legal_moves()
            .iter()
            .filter(|mv| mv.from() == algebraic_to_square("a7").expect("a7 should parse"))
            .map(move_to_algebraic)
            .collect();
        lan.sort();
        assert_eq!(lan, vec!["a7a8b", "a7a8n", "a7a8q", "a7a8r"]);
    }

    #[test]
    fn coordinate_moves_parse_with_optional_promotion() {
        let (from, to, promo) = parse_coordinate_move("e7e8Q").expect("should parse");
        assert_eq!(from.to_string(), "e7");
        assert_eq!(to.to_string(), "e8");
        assert_eq!(promo, Some(PieceKind::Queen));

        let (_, _, promo) = parse_coordinate_move("g1f3").expect("should parse");
        assert_eq!(promo, None);

        assert!(parse_coordinate_move("e7e8x").is_err());
        assert!(parse_coordinate_move("e2").is_err());
    }
}
