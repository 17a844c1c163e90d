use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::enemy_piece_on;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::piece_offsets::PAWN_CAPTURE_COLS;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let pawn = Piece::new(side, PieceKind::Pawn);
    let dir = side.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if game_state.piece_at(one_step).is_none() {
            push_pawn_move(from, one_step, pawn, None, out);

            if from.row() == side.pawn_start_row() {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if game_state.piece_at(two_step).is_none() {
                        out.push(ChessMove::quiet_or_capture(from, two_step, pawn, None));
                    }
                }
            }
        }
    }

    for d_col in PAWN_CAPTURE_COLS {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };

        if let Some(captured) = enemy_piece_on(game_state, to) {
            push_pawn_move(from, to, pawn, Some(captured), out);
        } else if game_state.en_passant_square == Some(to) {
            let victim = Piece::new(side.opposite(), PieceKind::Pawn);
            out.push(ChessMove::en_passant(from, to, pawn, victim));
        }
    }
}

/// Emits one move, or the four promotion variants on the far rank.
fn push_pawn_move(
    from: Square,
    to: Square,
    pawn: Piece,
    captured: Option<Piece>,
    out: &mut Vec<ChessMove>,
) {
    if to.row() == pawn.color.promotion_row() {
        for kind in PROMOTION_KINDS {
            out.push(ChessMove::promotion(from, to, pawn, captured, kind));
        }
    } else {
        out.push(ChessMove::quiet_or_capture(from, to, pawn, captured));
    }
}
