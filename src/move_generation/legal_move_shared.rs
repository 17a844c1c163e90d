use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;

/// Walks each ray outward from `from` until the edge, a friendly piece
/// (excluded) or an enemy piece (included as a capture).
pub fn push_slider_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(ChessMove::quiet_or_capture(from, to, piece, None)),
                Some(target) if target.color != piece.color => {
                    out.push(ChessMove::quiet_or_capture(from, to, piece, Some(target)));
                    break;
                }
                Some(_) => break,
            }
            cursor = to;
        }
    }
}

/// Tests each offset once; empty or enemy-occupied landings are kept.
pub fn push_step_moves(
    game_state: &GameState,
    from: Square,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<ChessMove>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            None => out.push(ChessMove::quiet_or_capture(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                out.push(ChessMove::quiet_or_capture(from, to, piece, Some(target)));
            }
            Some(_) => {}
        }
    }
}

#[inline]
pub fn enemy_piece_on(game_state: &GameState, square: Square) -> Option<Piece> {
    game_state
        .piece_at(square)
        .filter(|piece| piece.color != game_state.side_to_move)
}
