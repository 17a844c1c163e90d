//! Pseudo-legal bishop move generation.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_slider_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::piece_offsets::BISHOP_DIRECTIONS;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move, PieceKind::Bishop);
    push_slider_moves(game_state, from, piece, &BISHOP_DIRECTIONS, out);
}
