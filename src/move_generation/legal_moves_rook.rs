//! Pseudo-legal rook move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::piece_offsets::ROOK_DIRECTIONS;

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move, PieceKind::Rook);
    push_slider_moves(game_state, from, piece, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::test_support::{diagram, sq};

    #[test]
    fn rays_stop_at_blockers_and_include_captures() {
        let rows = [
            "....k...", "........", "........", "...p....", "........", "........", "...R.N..",
            "....K...",
        ];
        let game = diagram(rows, Color::White, CastlingRights::NONE);
        let mut out = Vec::new();
        generate_rook_moves(&game, sq("d2"), &mut out);

        let mut targets: Vec<String> = out.iter().map(|mv| mv.to().to_string()).collect();
        targets.sort();
        assert_eq!(
            targets,
            vec!["a2", "b2", "c2", "d1", "d3", "d4", "d5", "e2"]
        );
        let captures: Vec<_> = out.iter().filter(|mv| mv.is_capture()).collect();
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), sq("d5"));
    }
}
