//! King steps and castling.
//!
//! Plain king steps are pseudo-legal like any other piece. Castle moves are
//! only emitted once every precondition holds, because their legality depends
//! on attacks against squares the king never stands on after the move.

use crate::game_state::chess_rules::{
    king_start_square, kingside_rook_square, queenside_rook_square,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::piece_offsets::KING_OFFSETS;

pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let piece = Piece::new(game_state.side_to_move, PieceKind::King);
    push_step_moves(game_state, from, piece, &KING_OFFSETS, out);
}

/// Appends the castle moves currently available to the side to move.
///
/// Rights are checked first since they are the cheapest filter; then the
/// king must not be in check, the squares between king and rook must be
/// empty, and the squares the king crosses and lands on must not be attacked.
pub fn generate_castle_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let rights = game_state.castling_rights;
    if !rights.kingside(side) && !rights.queenside(side) {
        return;
    }

    let king_from = king_start_square(side);
    if game_state.king_square(side) != king_from {
        return;
    }

    let enemy = side.opposite();
    if is_square_attacked(game_state, king_from, enemy) {
        return;
    }

    let king = Piece::new(side, PieceKind::King);
    let row = king_from.row();
    let col = king_from.col();

    if rights.kingside(side)
        && game_state.piece_at(kingside_rook_square(side)) == Some(Piece::new(side, PieceKind::Rook))
    {
        let transit = [Square::at(row, col + 1), Square::at(row, col + 2)];
        if transit.iter().all(|&sq| game_state.piece_at(sq).is_none())
            && transit
                .iter()
                .all(|&sq| !is_square_attacked(game_state, sq, enemy))
        {
            out.push(ChessMove::castle(king_from, transit[1], king));
        }
    }

    if rights.queenside(side)
        && game_state.piece_at(queenside_rook_square(side))
            == Some(Piece::new(side, PieceKind::Rook))
    {
        let between = [
            Square::at(row, col - 1),
            Square::at(row, col - 2),
            Square::at(row, col - 3),
        ];
        // The b-file square must be empty but may be attacked.
        let king_path = &between[..2];
        if between.iter().all(|&sq| game_state.piece_at(sq).is_none())
            && king_path
                .iter()
                .all(|&sq| !is_square_attacked(game_state, sq, enemy))
        {
            out.push(ChessMove::castle(king_from, between[1], king));
        }
    }
}
