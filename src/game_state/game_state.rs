//! Core mailbox board state.
//!
//! `GameState` is the single mutable position that the driver and the search
//! share. It is changed only through `apply_move` / `undo_move` (see
//! `move_generation::legal_move_apply`), and every change is recorded on the
//! history stack so the search can walk a whole game tree on one buffer.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    king_start_square, kingside_rook_square, queenside_rook_square, BACK_RANK,
};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::ChessMove;

/// Full game position plus the undo history needed for exact unmaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][col], row 0 is rank 8.
    pub(crate) board: [[Option<Piece>; 8]; 8],

    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<Square>,

    // Indexed by `Color::index`.
    pub(crate) king_squares: [Square; 2],

    pub(crate) history: Vec<UndoState>,
    pub(crate) status: TerminalStatus,
}

/// Comparable view of every field that `undo_move` must restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSnapshot {
    pub board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub king_squares: [Square; 2],
    pub history_len: usize,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial array, White to move, all castling rights held.
    pub fn new_game() -> Self {
        let mut board = [[None; 8]; 8];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board[Color::Black.back_row() as usize][col] = Some(Piece::new(Color::Black, *kind));
            board[Color::White.back_row() as usize][col] = Some(Piece::new(Color::White, *kind));
            board[Color::Black.pawn_start_row() as usize][col] =
                Some(Piece::new(Color::Black, PieceKind::Pawn));
            board[Color::White.pawn_start_row() as usize][col] =
                Some(Piece::new(Color::White, PieceKind::Pawn));
        }

        Self {
            board,
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant_square: None,
            king_squares: [
                king_start_square(Color::White),
                king_start_square(Color::Black),
            ],
            history: Vec::new(),
            status: TerminalStatus::Unknown,
        }
    }

    /// Builds a constructed position from an explicit piece list.
    ///
    /// Each color needs exactly one king, pawns may not stand on the first or
    /// last rank, and any claimed castling right needs its king and rook on
    /// their home squares.
    pub fn from_placements(
        side_to_move: Color,
        placements: &[(Square, Piece)],
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let mut board = [[None; 8]; 8];
        let mut kings: [Option<Square>; 2] = [None, None];

        for &(square, piece) in placements {
            let cell = &mut board[square.row() as usize][square.col() as usize];
            if cell.is_some() {
                return Err(ChessError::InvalidPlacement(format!(
                    "square {square} is occupied twice"
                )));
            }
            if piece.is_pawn() && (square.row() == 0 || square.row() == 7) {
                return Err(ChessError::InvalidPlacement(format!(
                    "pawn on back rank at {square}"
                )));
            }
            if piece.is_king() {
                if kings[piece.color.index()].is_some() {
                    return Err(ChessError::InvalidPlacement(format!(
                        "more than one {:?} king",
                        piece.color
                    )));
                }
                kings[piece.color.index()] = Some(square);
            }
            *cell = Some(piece);
        }

        let (Some(white_king), Some(black_king)) = (kings[0], kings[1]) else {
            return Err(ChessError::InvalidPlacement(
                "each side needs exactly one king".to_owned(),
            ));
        };

        let state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_square: None,
            king_squares: [white_king, black_king],
            history: Vec::new(),
            status: TerminalStatus::Unknown,
        };

        for color in [Color::White, Color::Black] {
            let king_home = state.piece_at(king_start_square(color))
                == Some(Piece::new(color, PieceKind::King));
            let rook = Some(Piece::new(color, PieceKind::Rook));
            if castling_rights.kingside(color)
                && !(king_home && state.piece_at(kingside_rook_square(color)) == rook)
            {
                return Err(ChessError::InvalidPlacement(format!(
                    "{color:?} kingside castling claimed without king and rook at home"
                )));
            }
            if castling_rights.queenside(color)
                && !(king_home && state.piece_at(queenside_rook_square(color)) == rook)
            {
                return Err(ChessError::InvalidPlacement(format!(
                    "{color:?} queenside castling claimed without king and rook at home"
                )));
            }
        }

        Ok(state)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn history(&self) -> &[UndoState] {
        &self.history
    }

    #[inline]
    pub fn last_move(&self) -> Option<&ChessMove> {
        self.history.last().map(|entry| &entry.mv)
    }

    /// Verdict of the most recent `legal_moves` call, `Unknown` if the board
    /// changed since.
    #[inline]
    pub fn status(&self) -> TerminalStatus {
        self.status
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.status == TerminalStatus::Checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.status == TerminalStatus::Stalemate
    }

    /// Occupied squares with their pieces, row-major from a8.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.piece_at(square).map(|piece| (square, piece)))
    }

    pub fn snapshot(&self) -> PositionSnapshot {
        PositionSnapshot {
            board: self.board,
            side_to_move: self.side_to_move,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            king_squares: self.king_squares,
            history_len: self.history.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sq;

    #[test]
    fn new_game_has_thirty_two_pieces_and_home_kings() {
        let game = GameState::new_game();
        assert_eq!(game.pieces().count(), 32);
        assert_eq!(game.king_square(Color::White), sq("e1"));
        assert_eq!(game.king_square(Color::Black), sq("e8"));
        assert_eq!(
            game.piece_at(sq("d1")),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            game.piece_at(sq("h7")),
            Some(Piece::new(Color::Black, PieceKind::Pawn))
        );
        assert_eq!(game.status(), TerminalStatus::Unknown);
    }

    #[test]
    fn placements_require_one_king_per_side() {
        let white_king = Piece::new(Color::White, PieceKind::King);
        let err = GameState::from_placements(
            Color::White,
            &[(sq("e1"), white_king)],
            CastlingRights::NONE,
        )
        .expect_err("missing black king should be rejected");
        assert!(matches!(err, ChessError::InvalidPlacement(_)));

        let err = GameState::from_placements(
            Color::White,
            &[
                (sq("e1"), white_king),
                (sq("e2"), white_king),
                (sq("e8"), Piece::new(Color::Black, PieceKind::King)),
            ],
            CastlingRights::NONE,
        )
        .expect_err("two white kings should be rejected");
        assert!(matches!(err, ChessError::InvalidPlacement(_)));
    }

    #[test]
    fn placements_reject_unbacked_castling_rights() {
        let err = GameState::from_placements(
            Color::White,
            &[
                (sq("e1"), Piece::new(Color::White, PieceKind::King)),
                (sq("e8"), Piece::new(Color::Black, PieceKind::King)),
            ],
            CastlingRights {
                white_kingside: true,
                ..CastlingRights::NONE
            },
        )
        .expect_err("kingside right without a rook should be rejected");
        assert!(matches!(err, ChessError::InvalidPlacement(_)));
    }

    #[test]
    fn placements_reject_back_rank_pawns() {
        let err = GameState::from_placements(
            Color::White,
            &[
                (sq("e1"), Piece::new(Color::White, PieceKind::King)),
                (sq("e8"), Piece::new(Color::Black, PieceKind::King)),
                (sq("a8"), Piece::new(Color::White, PieceKind::Pawn)),
            ],
            CastlingRights::NONE,
        )
        .expect_err("pawn on the last rank should be rejected");
        assert!(matches!(err, ChessError::InvalidPlacement(_)));
    }
}
