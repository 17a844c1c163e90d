//! Uniform random-move engine.
//!
//! Selects uniformly from legal moves and doubles as the fallback picker when
//! a search returns no move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;
use crate::utils::algebraic::move_to_algebraic;

/// Uniform pick; `None` only for an empty slice.
#[inline]
pub fn random_move<R: Rng + ?Sized>(moves: &[ChessMove], rng: &mut R) -> Option<ChessMove> {
    moves.choose(rng).copied()
}

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        _params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = random_move(&legal_moves, &mut self.rng);
        tracing::debug!(
            engine = self.name(),
            legal = legal_moves.len(),
            chosen = ?out.best_move.as_ref().map(move_to_algebraic),
            "random move chosen"
        );
        Ok(out)
    }
}
