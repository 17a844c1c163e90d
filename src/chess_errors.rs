//! Errors used throughout the chess core.
//!
//! The rules engine never produces an illegal move, so these variants only
//! describe bad input arriving at the crate boundary: coordinates off the
//! board, malformed algebraic text, placements that cannot form a game, and
//! moves that are not in the current legal set.

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Unified error type for the chess core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Row or column outside `0..8`.
    #[error("invalid square: row {row}, col {col} (both must be 0-7)")]
    InvalidSquare { row: i8, col: i8 },

    /// Algebraic square text such as `e4` could not be parsed.
    #[error("invalid algebraic square: {0:?}")]
    InvalidAlgebraicSquare(String),

    /// No piece stands on the requested start square.
    #[error("no piece on square {0}")]
    NoPieceAtSquare(Square),

    /// The piece on the start square belongs to the side not on move.
    #[error("piece on square {0} does not belong to the side to move")]
    WrongSideToMove(Square),

    /// The move is not in the current legal move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A caller-supplied placement cannot form a playable position.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),
}

/// Result alias for chess core operations.
pub type ChessResult<T> = Result<T, ChessError>;
