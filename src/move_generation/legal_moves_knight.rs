use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::piece_offsets::KNIGHT_OFFSETS;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move, PieceKind::Knight);
    push_step_moves(game_state, from, piece, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::game_state::GameState;
    use crate::test_support::sq;

    #[test]
    fn corner_knight_has_two_targets() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&game, sq("b1"), &mut out);
        let mut targets: Vec<String> = out.iter().map(|mv| mv.to().to_string()).collect();
        targets.sort();
        assert_eq!(targets, vec!["a3", "c3"]);
    }
}
