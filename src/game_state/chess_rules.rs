//! Canonical chess-rule constants.
//!
//! Stores the initial array and the fixed squares that castling depends on.

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Back-rank order from file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

#[inline]
pub const fn king_start_square(color: Color) -> Square {
    Square::at(color.back_row(), KING_START_COL)
}

#[inline]
pub const fn kingside_rook_square(color: Color) -> Square {
    Square::at(color.back_row(), KINGSIDE_ROOK_COL)
}

#[inline]
pub const fn queenside_rook_square(color: Color) -> Square {
    Square::at(color.back_row(), QUEENSIDE_ROOK_COL)
}

/// Rook `(from, to)` for a castle whose king lands on `king_to`.
#[inline]
pub fn castle_rook_squares(king_from: Square, king_to: Square) -> (Square, Square) {
    let row = king_to.row();
    if king_to.col() > king_from.col() {
        (
            Square::at(row, KINGSIDE_ROOK_COL),
            Square::at(row, king_to.col() - 1),
        )
    } else {
        (
            Square::at(row, QUEENSIDE_ROOK_COL),
            Square::at(row, king_to.col() + 1),
        )
    }
}
