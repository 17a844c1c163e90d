//! In-place make/unmake.
//!
//! `apply_move` records everything `undo_move` cannot recompute from the move
//! itself (castling rights and the en-passant target) on the history stack,
//! so a search can walk an entire tree on one `GameState`.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    castle_rook_squares, kingside_rook_square, queenside_rook_square,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::move_to_algebraic;

/// Applies a move produced by this position's generator.
///
/// The move is trusted; use [`try_apply_move`] for caller-supplied moves.
pub fn apply_move(game_state: &mut GameState, mv: &ChessMove) {
    let mover = mv.moved_piece();

    game_state.history.push(UndoState {
        mv: *mv,
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
    });

    game_state.set_piece(mv.from(), None);
    let landed = match mv.promotion_piece() {
        Some(kind) => Piece::new(mover.color, kind),
        None => mover,
    };
    game_state.set_piece(mv.to(), Some(landed));

    if mv.is_en_passant() {
        game_state.set_piece(mv.en_passant_victim_square(), None);
    }

    if mv.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(mv.from(), mv.to());
        let rook = game_state.piece_at(rook_from);
        game_state.set_piece(rook_from, None);
        game_state.set_piece(rook_to, rook);
    }

    if mover.is_king() {
        game_state.king_squares[mover.color.index()] = mv.to();
    }

    game_state.en_passant_square = mv.skipped_square();
    update_castling_rights(&mut game_state.castling_rights, mv);

    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.status = TerminalStatus::Unknown;
}

/// Reverts the most recent move. Does nothing on an empty history.
pub fn undo_move(game_state: &mut GameState) {
    let Some(entry) = game_state.history.pop() else {
        return;
    };
    let mv = entry.mv;
    let mover = mv.moved_piece();

    game_state.set_piece(mv.from(), Some(mover));
    if mv.is_en_passant() {
        game_state.set_piece(mv.to(), None);
        game_state.set_piece(mv.en_passant_victim_square(), mv.captured_piece());
    } else {
        game_state.set_piece(mv.to(), mv.captured_piece());
    }

    if mv.is_castle() {
        let (rook_from, rook_to) = castle_rook_squares(mv.from(), mv.to());
        let rook = game_state.piece_at(rook_to);
        game_state.set_piece(rook_to, None);
        game_state.set_piece(rook_from, rook);
    }

    if mover.is_king() {
        game_state.king_squares[mover.color.index()] = mv.from();
    }

    game_state.castling_rights = entry.prev_castling_rights;
    game_state.en_passant_square = entry.prev_en_passant_square;
    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.status = TerminalStatus::Unknown;
}

/// Applies `mv` only if it is in the current legal move set.
pub fn try_apply_move(game_state: &mut GameState, mv: &ChessMove) -> ChessResult<()> {
    let legal = game_state.legal_moves();
    let Some(found) = legal.iter().find(|candidate| *candidate == mv) else {
        return Err(ChessError::IllegalMove(move_to_algebraic(mv)));
    };
    let found = *found;
    apply_move(game_state, &found);
    Ok(())
}

/// Resolves caller-supplied coordinates to the matching legal move.
pub fn find_legal_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<ChessMove> {
    let Some(piece) = game_state.piece_at(from) else {
        return Err(ChessError::NoPieceAtSquare(from));
    };
    if piece.color != game_state.side_to_move {
        return Err(ChessError::WrongSideToMove(from));
    }

    game_state
        .legal_moves()
        .into_iter()
        .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
        .ok_or_else(|| {
            let suffix = promotion.map(|kind| kind.letter().to_string()).unwrap_or_default();
            ChessError::IllegalMove(format!("{from}{to}{suffix}"))
        })
}

/// Rights only ever go from held to revoked.
fn update_castling_rights(rights: &mut CastlingRights, mv: &ChessMove) {
    let mover = mv.moved_piece();

    if mover.is_king() {
        rights.revoke_all(mover.color);
    }

    if mover.kind == PieceKind::Rook {
        if mv.from() == kingside_rook_square(mover.color) {
            rights.revoke_kingside(mover.color);
        } else if mv.from() == queenside_rook_square(mover.color) {
            rights.revoke_queenside(mover.color);
        }
    }

    if let Some(captured) = mv.captured_piece() {
        if captured.kind == PieceKind::Rook {
            if mv.to() == kingside_rook_square(captured.color) {
                rights.revoke_kingside(captured.color);
            } else if mv.to() == queenside_rook_square(captured.color) {
                rights.revoke_queenside(captured.color);
            }
        }
    }
}

impl GameState {
    #[inline]
    pub fn apply_move(&mut self, mv: &ChessMove) {
        apply_move(self, mv);
    }

    #[inline]
    pub fn undo_move(&mut self) {
        undo_move(self);
    }

    #[inline]
    pub fn try_apply_move(&mut self, mv: &ChessMove) -> ChessResult<()> {
        try_apply_move(self, mv)
    }

    #[inline]
    pub fn find_legal_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> ChessResult<ChessMove> {
        find_legal_move(self, from, to, promotion)
    }
}
