//! Full legal move generation pipeline.
//!
//! Dispatches piece-wise pseudo-legal generation, appends castle moves, then
//! applies each candidate on the live position and keeps those that do not
//! leave the mover's king attacked. The pass finishes by classifying the
//! position as ongoing, checkmate or stalemate.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_checks::{in_check, is_king_in_check};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;

/// Number of trailing history entries the repetition heuristic inspects.
pub const REPETITION_WINDOW: usize = 6;

/// Pseudo-legal moves for the side to move, castling excluded.
pub fn generate_pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let mut out = Vec::with_capacity(64);
    let side = game_state.side_to_move;

    for (from, piece) in game_state.pieces() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, &mut out),
        }
    }

    out
}

/// Legal moves for the side to move; also sets the terminal status.
pub fn generate_legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let mut candidates = generate_pseudo_legal_moves(game_state);
    generate_castle_moves(game_state, &mut candidates);

    let mover = game_state.side_to_move;
    let mut legal = Vec::with_capacity(candidates.len());
    for mv in candidates {
        apply_move(game_state, &mv);
        let exposes_king = is_king_in_check(game_state, mover);
        undo_move(game_state);
        if !exposes_king {
            legal.push(mv);
        }
    }

    game_state.status = if legal.is_empty() {
        if in_check(game_state) {
            TerminalStatus::Checkmate
        } else {
            TerminalStatus::Stalemate
        }
    } else if repeats_last_two_plies(&game_state.history) {
        TerminalStatus::Stalemate
    } else {
        TerminalStatus::Ongoing
    };

    legal
}

/// Crude repetition check: the last four plies repeat the two before them
/// (`h[-6] == h[-2]` and `h[-5] == h[-1]` by move key). Not a threefold rule.
pub fn repeats_last_two_plies(history: &[UndoState]) -> bool {
    let n = history.len();
    if n < REPETITION_WINDOW {
        return false;
    }
    let key = |back: usize| history[n - back].mv.key();
    key(6) == key(2) && key(5) == key(1)
}

impl GameState {
    /// Legal moves for the side to move.
    ///
    /// Runs apply/undo on this position for every candidate and leaves it
    /// exactly as found, apart from updating [`GameState::status`].
    #[inline]
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        generate_legal_moves(self)
    }

    /// True when the side to move has its king attacked.
    #[inline]
    pub fn in_check(&self) -> bool {
        in_check(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{diagram, play, sq};

    #[test]
    fn start_position_has_twenty_moves() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        assert_eq!(moves.len(), 20);
        assert_eq!(game.status(), TerminalStatus::Ongoing);
        assert!(!game.is_checkmate());
        assert!(!game.is_stalemate());
    }

    #[test]
    fn back_rank_mate_is_checkmate() {
        let rows = [
            "R.....k.", ".....ppp", "........", "........", "........", "........", "........",
            "......K.",
        ];
        let mut game = diagram(rows, Color::Black, CastlingRights::NONE);
        let moves = game.legal_moves();
        assert!(moves.is_empty());
        assert!(game.is_checkmate());
        assert!(!game.is_stalemate());
    }

    #[test]
    fn lone_king_with_no_safe_square_is_stalemate() {
        let rows = [
            "k.......", "..Q.....", "........", "........", "........", "........", "........",
            "....K...",
        ];
        let mut game = diagram(rows, Color::Black, CastlingRights::NONE);
        let moves = game.legal_moves();
        assert!(moves.is_empty());
        assert!(game.is_stalemate());
        assert!(!game.is_checkmate());
    }

    #[test]
    fn pinned_piece_may_not_leave_the_pin_line() {
        let rows = [
            "....k...", "........", "........", "........", "....r...", "........", "....N...",
            "....K...",
        ];
        let mut game = diagram(rows, Color::White, CastlingRights::NONE);
        let moves = game.legal_moves();
        assert!(moves.iter().all(|mv| mv.from() != sq("e2")));
    }

    #[test]
    fn check_must_be_answered() {
        let rows = [
            "....k...", "........", "........", "........", "........", "........", "...PP...",
            "r...K...",
        ];
        let mut game = diagram(rows, Color::White, CastlingRights::NONE);
        assert!(game.in_check());
        let moves = game.legal_moves();
        // Stepping along the first rank stays on the rook's line.
        let targets: Vec<String> = moves.iter().map(|mv| mv.to().to_string()).collect();
        assert!(moves.iter().all(|mv| mv.from() == sq("e1")));
        assert_eq!(targets, vec!["f2"]);
        assert_eq!(game.status(), TerminalStatus::Ongoing);
    }

    #[test]
    fn en_passant_is_available_for_one_ply_only() {
        let rows = [
            "....k...", "...p....", "........", "....P...", "........", "........", "........",
            "....K...",
        ];
        let mut game = diagram(rows, Color::Black, CastlingRights::NONE);
        play(&mut game, "d7d5");

        let ep_now = game
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.is_en_passant())
            .count();
        assert_eq!(ep_now, 1);

        play(&mut game, "e1f1");
        play(&mut game, "e8f8");
        let ep_later = game
            .legal_moves()
            .into_iter()
            .filter(|mv| mv.is_en_passant())
            .count();
        assert_eq!(ep_later, 0);
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_filtered() {
        // Capturing en passant would clear the fifth rank between rook and king.
        let rows = [
            "....k...", "...p....", "........", "K...P..r", "........", "........", "........",
            "........",
        ];
        let mut game = diagram(rows, Color::Black, CastlingRights::NONE);
        play(&mut game, "d7d5");
        assert!(game.legal_moves().iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn legal_query_leaves_position_untouched() {
        let mut game = GameState::new_game();
        play(&mut game, "e2e4");
        let before = game.snapshot();
        let _ = game.legal_moves();
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn two_ply_oscillation_forces_stalemate_flag() {
        let mut game = GameState::new_game();
        for lan in ["g1f3", "g8f6", "f3g1", "f6g8", "g1f3", "g8f6"] {
            play(&mut game, lan);
        }
        let moves = game.legal_moves();
        assert!(!moves.is_empty());
        assert!(game.is_stalemate());
        assert!(repeats_last_two_plies(game.history()));
    }

    #[test]
    fn apply_and_undo_reset_status_to_unknown() {
        let mut game = GameState::new_game();
        let moves = game.legal_moves();
        assert_eq!(game.status(), TerminalStatus::Ongoing);
        game.apply_move(&moves[0]);
        assert_eq!(game.status(), TerminalStatus::Unknown);
        let _ = game.legal_moves();
        game.undo_move();
        assert_eq!(game.status(), TerminalStatus::Unknown);
    }
}
