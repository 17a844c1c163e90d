//! Alpha-beta minimax engine with a random fallback.
//!
//! The search runs on the caller's position and restores it. When the search
//! yields no move (depth 0, or a budget spent before any root move was
//! scored), a uniform random legal move is substituted.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::engines::engine_random::random_move;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::search::board_scoring::PositionalMaterialScorer;
use crate::search::minimax::{minimax_search, SearchConfig, SearchResult};
use crate::utils::algebraic::move_to_algebraic;

/// Searches `depth` plies and returns the move to play, or `None` when the
/// side to move has no legal move.
pub fn best_move<R: Rng + ?Sized>(
    game_state: &mut GameState,
    depth: u8,
    rng: &mut R,
) -> Option<ChessMove> {
    let config = SearchConfig {
        max_depth: depth,
        ..SearchConfig::default()
    };
    search_with_fallback(game_state, config, rng).best_move
}

fn search_with_fallback<R: Rng + ?Sized>(
    game_state: &mut GameState,
    config: SearchConfig,
    rng: &mut R,
) -> SearchResult {
    let mut result = minimax_search(game_state, &PositionalMaterialScorer, config, rng);
    if result.best_move.is_none() {
        let legal = game_state.legal_moves();
        result.best_move = random_move(&legal, rng);
        if result.best_move.is_some() {
            tracing::debug!(depth = config.max_depth, "search gave no move, using random fallback");
        }
    }
    result
}

pub struct MinimaxEngine {
    config: SearchConfig,
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng(config: SearchConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::from_os_rng(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
            max_nodes: params.max_nodes.or(self.config.max_nodes),
        };
        let result = search_with_fallback(game_state, config, &mut self.rng);

        let mut out = EngineOutput {
            best_move: result.best_move,
            score: result.best_move.map(|_| result.best_score),
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {}",
            config.max_depth, result.nodes
        ));
        if result.aborted {
            out.info_lines
                .push("info string minimax_engine node_budget_exhausted".to_owned());
        }
        if let Some(mv) = &result.best_move {
            out.info_lines.push(format!(
                "info score {} pv {}",
                result.best_score,
                move_to_algebraic(mv)
            ));
        }

        tracing::debug!(
            engine = self.name(),
            depth = config.max_depth,
            nodes = result.nodes,
            score = result.best_score,
            aborted = result.aborted,
            chosen = ?result.best_move.as_ref().map(move_to_algebraic),
            "minimax move chosen"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{CastlingRights, Color};
    use crate::test_support::{diagram, sq};

    #[test]
    fn depth_zero_falls_back_to_a_random_legal_move() {
        let mut game = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(8);
        let mv = best_move(&mut game, 0, &mut rng).expect("fallback should pick a move");
        assert!(game.legal_moves().contains(&mv));
    }

    #[test]
    fn no_move_when_side_to_move_is_mated() {
        let rows = [
            "R.....k.", ".....ppp", "........", "........", "........", "........", "........",
            "......K.",
        ];
        let mut game = diagram(rows, Color::Black, CastlingRights::NONE);
        let mut rng = StdRng::seed_from_u64(8);
        assert_eq!(best_move(&mut game, 3, &mut rng), None);
        assert!(game.is_checkmate());
    }

    #[test]
    fn engine_finds_mate_and_reports_info() {
        let rows = [
            "......k.", ".....ppp", "........", "........", "........", "........", "........",
            "R.....K.",
        ];
        let mut game = diagram(rows, Color::White, CastlingRights::NONE);
        let before = game.snapshot();
        let mut engine = MinimaxEngine::new(SearchConfig::default(), 1);
        let params = GoParams {
            depth: Some(2),
            ..GoParams::default()
        };
        let out = engine
            .choose_move(&mut game, &params)
            .expect("minimax engine should not fail");
        let mv = out.best_move.expect("a move should be found");
        assert_eq!((mv.from(), mv.to()), (sq("a1"), sq("a8")));
        assert!(out.info_lines.iter().any(|line| line.ends_with("pv a1a8")));
        assert_eq!(game.snapshot(), before);
    }
}
