//! Engine abstraction layer used by the match harness and the self-play CLI.
//!
//! Defines common input parameters and output payloads so different move
//! selection strategies can be swapped at runtime behind a single trait.

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::ChessMove;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured depth when set.
    pub depth: Option<u8>,
    /// Overrides the engine's configured node budget when set.
    pub max_nodes: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    /// White-relative score of the chosen line, when the engine computes one.
    pub score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Chooses a move for the side to move.
    ///
    /// The engine may explore on `game_state` but must leave it as found;
    /// the returned move is not applied.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput>;
}
