//! Move-path enumeration for validating the generator.
//!
//! Walks the legal move tree to a fixed depth on one `GameState` via
//! apply/undo and tallies leaf statistics comparable with published tables.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::in_check;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Leaf statistics `depth` plies below `game_state`. The position is
/// restored before returning.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        perft_recurse(game_state, &mv, depth - 1, &mut total);
    }
    total
}

/// Per-root-move node counts, for diffing against a reference engine.
pub fn perft_divide(game_state: &mut GameState, depth: u8) -> Vec<(ChessMove, u64)> {
    if depth == 0 {
        return Vec::new();
    }

    let mut out = Vec::new();
    for mv in game_state.legal_moves() {
        let mut local = PerftCounts::default();
        perft_recurse(game_state, &mv, depth - 1, &mut local);
        out.push((mv, local.nodes));
    }
    out
}

fn perft_recurse(game_state: &mut GameState, mv: &ChessMove, remaining: u8, counts: &mut PerftCounts) {
    game_state.apply_move(mv);

    if remaining == 0 {
        let mut leaf = PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
        if mv.is_capture() {
            leaf.captures += 1;
        }
        if mv.is_en_passant() {
            leaf.en_passant += 1;
        }
        if mv.is_castle() {
            leaf.castles += 1;
        }
        if mv.promotion_piece().is_some() {
            leaf.promotions += 1;
        }
        if in_check(game_state) {
            leaf.checks += 1;
            if game_state.legal_moves().is_empty() {
                leaf.checkmates += 1;
            }
        }
        counts.merge(leaf);
    } else {
        for child in game_state.legal_moves() {
            perft_recurse(game_state, &child, remaining - 1, counts);
        }
    }

    game_state.undo_move();
}
