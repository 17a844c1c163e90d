//! Fixed-depth minimax with alpha-beta pruning.
//!
//! Explores the tree on the caller's `GameState` through apply/undo; the
//! position is back in its original state when the search returns. White
//! maximises and Black minimises the White-relative score.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::{mate_score, stalemate_score, BoardScorer, MATE_SCORE};

/// Bound wider than any reachable score.
const SCORE_INFINITY: i32 = MATE_SCORE + 1;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
    /// Node budget; once spent, remaining nodes are scored statically.
    pub max_nodes: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_nodes: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    /// White-relative.
    pub best_score: i32,
    pub nodes: u64,
    /// True when the node budget cut the search short.
    pub aborted: bool,
}

struct SearchContext<'a, S: BoardScorer, R: Rng + ?Sized> {
    scorer: &'a S,
    rng: &'a mut R,
    max_nodes: Option<u64>,
    nodes: u64,
    aborted: bool,
}

/// Alpha-beta search to `config.max_depth`. Root moves are shuffled with
/// `rng` so equal-valued moves are picked in a seed-dependent order.
///
/// `best_move` is `None` when the root is terminal or the depth is 0.
pub fn minimax_search<S: BoardScorer, R: Rng + ?Sized>(
    game_state: &mut GameState,
    scorer: &S,
    config: SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let mut ctx = SearchContext {
        scorer,
        rng,
        max_nodes: config.max_nodes,
        nodes: 0,
        aborted: false,
    };

    let (best_score, best_move) = alpha_beta(
        &mut ctx,
        game_state,
        config.max_depth,
        -SCORE_INFINITY,
        SCORE_INFINITY,
        0,
    );

    tracing::trace!(
        depth = config.max_depth,
        nodes = ctx.nodes,
        score = best_score,
        aborted = ctx.aborted,
        "minimax search finished"
    );

    SearchResult {
        best_move,
        best_score,
        nodes: ctx.nodes,
        aborted: ctx.aborted,
    }
}

fn alpha_beta<S: BoardScorer, R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, S, R>,
    game_state: &mut GameState,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ply: u8,
) -> (i32, Option<ChessMove>) {
    ctx.nodes += 1;

    let mut moves = game_state.legal_moves();
    if let Some(score) = terminal_score(game_state, ply) {
        return (score, None);
    }

    if depth == 0 {
        return (ctx.scorer.score(game_state), None);
    }
    if ctx.max_nodes.is_some_and(|budget| ctx.nodes >= budget) {
        ctx.aborted = true;
        return (ctx.scorer.score(game_state), None);
    }

    if ply == 0 {
        moves.shuffle(&mut *ctx.rng);
    }

    let maximizing = game_state.side_to_move() == Color::White;
    let mut best_score = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    let mut best_move = None;

    for mv in moves {
        game_state.apply_move(&mv);
        let (score, _) = alpha_beta(ctx, game_state, depth - 1, alpha, beta, ply + 1);
        game_state.undo_move();

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}

/// Plain minimax without pruning or shuffling, over the same scoring.
pub fn minimax_full_width<S: BoardScorer>(
    game_state: &mut GameState,
    scorer: &S,
    depth: u8,
) -> i32 {
    full_width(game_state, scorer, depth, 0)
}

fn full_width<S: BoardScorer>(game_state: &mut GameState, scorer: &S, depth: u8, ply: u8) -> i32 {
    let moves = game_state.legal_moves();
    if let Some(score) = terminal_score(game_state, ply) {
        return score;
    }
    if depth == 0 {
        return scorer.score(game_state);
    }

    let maximizing = game_state.side_to_move() == Color::White;
    let mut best = if maximizing {
        -SCORE_INFINITY
    } else {
        SCORE_INFINITY
    };
    for mv in moves {
        game_state.apply_move(&mv);
        let score = full_width(game_state, scorer, depth - 1, ply + 1);
        game_state.undo_move();
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

/// Score of a node whose status was just derived by `legal_moves`.
pub(crate) fn terminal_score(game_state: &GameState, ply: u8) -> Option<i32> {
    let side = game_state.side_to_move();
    match game_state.status() {
        TerminalStatus::Checkmate => Some(mate_score(side, ply)),
        TerminalStatus::Stalemate => Some(stalemate_score(side)),
        TerminalStatus::Ongoing | TerminalStatus::Unknown => None,
    }
}
