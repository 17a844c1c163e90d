//! Pluggable board evaluation interfaces and the baseline implementation.
//!
//! Search remains modular by delegating static position scoring to this trait,
//! allowing alternate heuristics to be swapped without altering search code.
//! All scores are White-relative and measured in tenths of a pawn.

use crate::game_state::{chess_types::*, game_state::GameState};

/// Checkmate sentinel. Mates found `ply` plies from the root score
/// `MATE_SCORE - ply` so shorter mates are preferred.
pub const MATE_SCORE: i32 = 30000;

/// Magnitude of a stalemate score; see [`stalemate_score`].
pub const STALEMATE_CONTEMPT: i32 = 10;

/// Static score of the initial array under [`PositionalMaterialScorer`].
pub const STARTING_POSITION_SCORE: i32 = 0;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective; positive favors White.
    fn score(&self, game_state: &GameState) -> i32;
}

/// White-relative score when `mated` has been checkmated `ply` plies deep.
#[inline]
pub const fn mate_score(mated: Color, ply: u8) -> i32 {
    -mated.sign() * (MATE_SCORE - ply as i32)
}

/// White-relative score when `stalemated` has no legal move.
///
/// Stalemate counts slightly against the side that delivered it, so a side
/// with a winning position prefers to keep playing.
#[inline]
pub const fn stalemate_score(stalemated: Color) -> i32 {
    stalemated.sign() * STALEMATE_CONTEMPT
}

/// Material plus piece-square weights.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalMaterialScorer;

impl PositionalMaterialScorer {
    /// Material in whole pawns.
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 10,
            PieceKind::King => 0,
        }
    }

    /// Positional weight in tenths of a pawn for `piece` on `square`.
    #[inline]
    pub fn square_weight(piece: Piece, square: Square) -> i32 {
        let table = match (piece.kind, piece.color) {
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_WEIGHTS,
            (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_WEIGHTS,
            (PieceKind::Knight, _) => &KNIGHT_WEIGHTS,
            (PieceKind::Bishop, _) => &BISHOP_WEIGHTS,
            (PieceKind::Rook, _) => &ROOK_WEIGHTS,
            (PieceKind::Queen, _) => &QUEEN_WEIGHTS,
            (PieceKind::King, _) => return 0,
        };
        table[square.row() as usize][square.col() as usize]
    }
}

impl BoardScorer for PositionalMaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .pieces()
            .map(|(square, piece)| {
                let value =
                    10 * Self::piece_value(piece.kind) + Self::square_weight(piece, square);
                piece.color.sign() * value
            })
            .sum()
    }
}

// Tables are indexed [row][col], row 0 is rank 8.

const KNIGHT_WEIGHTS: [[i32; 8]; 8] = [
    [1, 1, 1, 1, 1, 1, 1, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 3, 3, 3, 2, 1],
    [1, 2, 2, 2, 2, 2, 2, 1],
    [1, 1, 1, 1, 1, 1, 1, 1],
];

const BISHOP_WEIGHTS: [[i32; 8]; 8] = [
    [4, 3, 2, 1, 1, 2, 3, 4],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 4, 3, 3, 4, 3, 2],
    [3, 4, 3, 2, 2, 3, 4, 3],
    [4, 3, 2, 1, 1, 2, 3, 4],
];

const ROOK_WEIGHTS: [[i32; 8]; 8] = [
    [4, 3, 4, 4, 4, 4, 3, 4],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [4, 4, 4, 4, 4, 4, 4, 4],
    [4, 3, 4, 4, 4, 4, 3, 4],
];

const QUEEN_WEIGHTS: [[i32; 8]; 8] = [
    [1, 1, 1, 3, 1, 1, 1, 1],
    [1, 1, 2, 3, 2, 1, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 2, 3, 3, 3, 2, 2, 1],
    [1, 4, 3, 3, 3, 4, 2, 1],
    [1, 1, 2, 3, 2, 1, 2, 1],
    [1, 1, 1, 3, 1, 1, 1, 1],
];

const WHITE_PAWN_WEIGHTS: [[i32; 8]; 8] = [
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const BLACK_PAWN_WEIGHTS: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [1, 1, 1, 0, 0, 1, 1, 1],
    [1, 1, 2, 3, 3, 2, 1, 1],
    [1, 2, 3, 4, 4, 3, 2, 1],
    [2, 3, 3, 5, 5, 3, 3, 2],
    [5, 6, 6, 7, 7, 6, 6, 5],
    [8, 8, 8, 8, 8, 8, 8, 8],
    [8, 8, 8, 8, 8, 8, 8, 8],
];
