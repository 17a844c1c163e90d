use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::PositionalMaterialScorer;
use crate::search::greedy::greedy_search;
use crate::utils::algebraic::move_to_algebraic;

pub struct GreedyEngine {
    scorer: PositionalMaterialScorer,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            scorer: PositionalMaterialScorer,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            scorer: PositionalMaterialScorer,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let result = greedy_search(game_state, &self.scorer, &mut self.rng);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string greedy_engine nodes {}", result.nodes));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string greedy_engine ignored_depth {depth}"));
        }

        if let Some(mv) = result.best_move {
            out.info_lines.push(format!(
                "info score {} pv {}",
                result.best_score,
                move_to_algebraic(&mv)
            ));
            out.score = Some(result.best_score);
        }
        out.best_move = result.best_move;

        tracing::debug!(
            engine = self.name(),
            nodes = result.nodes,
            score = result.best_score,
            chosen = ?out.best_move.as_ref().map(move_to_algebraic),
            "greedy move chosen"
        );
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greedy_engine_returns_a_legal_move_and_restores_the_board() {
        let mut game = GameState::new_game();
        let before = game.snapshot();
        let out = GreedyEngine::new(4)
            .choose_move(&mut game, &GoParams::default())
            .expect("greedy engine should not fail");
        let mv = out.best_move.expect("start position has moves");
        assert!(game.legal_moves().contains(&mv));
        assert_eq!(game.snapshot(), before);
        assert!(out.info_lines.iter().any(|line| line.contains("pv")));
    }
}
