//! Attack detection.
//!
//! A square is attacked by a color when one of that color's pieces could
//! capture onto it under pseudo-legal movement. The probe works outward from
//! the target square, so it needs no move list and leaves the position
//! untouched.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::piece_offsets::{
    BISHOP_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, PAWN_CAPTURE_COLS, ROOK_DIRECTIONS,
};

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// True when the side to move has its king attacked.
#[inline]
pub fn in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    let holds = |sq: Square, kinds: &[PieceKind]| {
        game_state
            .piece_at(sq)
            .is_some_and(|piece| piece.color == attacker_color && kinds.contains(&piece.kind))
    };

    // A pawn attacks forward-diagonally, so look one row back from the target.
    let pawn_row = -attacker_color.pawn_direction();
    for d_col in PAWN_CAPTURE_COLS {
        if let Some(from) = square.offset(pawn_row, d_col) {
            if holds(from, &[PieceKind::Pawn]) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KNIGHT_OFFSETS {
        if let Some(from) = square.offset(d_row, d_col) {
            if holds(from, &[PieceKind::Knight]) {
                return true;
            }
        }
    }

    for &(d_row, d_col) in &KING_OFFSETS {
        if let Some(from) = square.offset(d_row, d_col) {
            if holds(from, &[PieceKind::King]) {
                return true;
            }
        }
    }

    ray_hits(game_state, square, &ROOK_DIRECTIONS, attacker_color, &[PieceKind::Rook, PieceKind::Queen])
        || ray_hits(
            game_state,
            square,
            &BISHOP_DIRECTIONS,
            attacker_color,
            &[PieceKind::Bishop, PieceKind::Queen],
        )
}

/// First piece met along each ray decides; only attacker sliders count.
fn ray_hits(
    game_state: &GameState,
    square: Square,
    directions: &[(i8, i8)],
    attacker_color: Color,
    sliders: &[PieceKind],
) -> bool {
    for &(d_row, d_col) in directions {
        let mut cursor = square;
        while let Some(next) = cursor.offset(d_row, d_col) {
            if let Some(piece) = game_state.piece_at(next) {
                if piece.color == attacker_color && sliders.contains(&piece.kind) {
                    return true;
                }
                break;
            }
            cursor = next;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{diagram, sq};

    #[test]
    fn start_position_third_rank_is_covered_by_pawns() {
        let game = GameState::new_game();
        assert!(is_square_attacked(&game, sq("e3"), Color::White));
        assert!(is_square_attacked(&game, sq("f6"), Color::Black));
        assert!(!is_square_attacked(&game, sq("e4"), Color::White));
        assert!(!in_check(&game));
    }

    #[test]
    fn pawn_push_square_is_not_attacked() {
        let rows = [
            "....k...", "........", "........", "...p....", "........", "........", "........",
            "....K...",
        ];
        let game = diagram(rows, Color::White, CastlingRights::NONE);
        // d5 pawn pushes to d4 but attacks c4 and e4.
        assert!(!is_square_attacked(&game, sq("d4"), Color::Black));
        assert!(is_square_attacked(&game, sq("c4"), Color::Black));
        assert!(is_square_attacked(&game, sq("e4"), Color::Black));
    }

    #[test]
    fn blocked_slider_does_not_attack_past_blocker() {
        let rows = [
            "r...k...", "........", "........", "........", "N.......", "........", "........",
            "....K...",
        ];
        let game = diagram(rows, Color::White, CastlingRights::NONE);
        assert!(is_square_attacked(&game, sq("a4"), Color::Black));
        assert!(!is_square_attacked(&game, sq("a3"), Color::Black));
    }

    #[test]
    fn queen_on_diagonal_gives_check() {
        let rows = [
            "....k...", "........", "........", "........", ".q......", "........", "........",
            "....K...",
        ];
        let game = diagram(rows, Color::White, CastlingRights::NONE);
        assert!(is_king_in_check(&game, Color::White));
        assert!(!is_king_in_check(&game, Color::Black));
    }
}
