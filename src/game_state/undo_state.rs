use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Single history record pushed by `apply_move` and popped by `undo_move`.
///
/// The move itself restores the board; the snapshots restore the latches that
/// cannot be recomputed from the board alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: ChessMove,
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<Square>,
}
