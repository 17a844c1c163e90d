use std::hash::{Hash, Hasher};

use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// Immutable description of one ply.
///
/// Moves are only produced by the position's own generator, so the fields are
/// read-only outside the crate. Two moves are equal when their coordinate key
/// and promotion choice match; the pieces and flags follow from those on any
/// given board.
#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    from: Square,
    to: Square,
    moved: Piece,
    captured: Option<Piece>,
    is_en_passant: bool,
    is_castle: bool,
    promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub(crate) fn quiet_or_capture(
        from: Square,
        to: Square,
        moved: Piece,
        captured: Option<Piece>,
    ) -> Self {
        Self {
            from,
            to,
            moved,
            captured,
            is_en_passant: false,
            is_castle: false,
            promotion: None,
        }
    }

    #[inline]
    pub(crate) fn promotion(
        from: Square,
        to: Square,
        moved: Piece,
        captured: Option<Piece>,
        promotion: PieceKind,
    ) -> Self {
        Self {
            promotion: Some(promotion),
            ..Self::quiet_or_capture(from, to, moved, captured)
        }
    }

    #[inline]
    pub(crate) fn en_passant(from: Square, to: Square, moved: Piece, captured: Piece) -> Self {
        Self {
            is_en_passant: true,
            ..Self::quiet_or_capture(from, to, moved, Some(captured))
        }
    }

    #[inline]
    pub(crate) fn castle(from: Square, to: Square, king: Piece) -> Self {
        Self {
            is_castle: true,
            ..Self::quiet_or_capture(from, to, king, None)
        }
    }

    #[inline]
    pub fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub fn moved_piece(&self) -> Piece {
        self.moved
    }

    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.is_castle
    }

    #[inline]
    pub fn promotion_piece(&self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// A pawn advance of two rows.
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved.is_pawn() && self.from.row().abs_diff(self.to.row()) == 2
    }

    /// Square skipped by a double pawn push.
    #[inline]
    pub fn skipped_square(&self) -> Option<Square> {
        self.is_double_pawn_push()
            .then(|| Square::at((self.from.row() + self.to.row()) / 2, self.to.col()))
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Square {
        Square::at(self.from.row(), self.to.col())
    }

    /// Coordinate key `start_row*1000 + start_col*100 + end_row*10 + end_col`.
    #[inline]
    pub fn key(&self) -> u16 {
        self.from.row() as u16 * 1000
            + self.from.col() as u16 * 100
            + self.to.row() as u16 * 10
            + self.to.col() as u16
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key() && self.promotion == other.promotion
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
        self.promotion.hash(state);
    }
}
