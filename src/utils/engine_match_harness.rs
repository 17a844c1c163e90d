//! Minimal head-to-head engine match harness for local testing.
//!
//! This module runs two `Engine` implementations against each other on one
//! authoritative `GameState`, with an optional seeded random opening prefix.
//! Every engine move is validated against the current legal set before it is
//! applied.

use rand::{rngs::StdRng, SeedableRng};
use std::time::Instant;

use crate::chess_errors::ChessResult;
use crate::engines::engine_random::random_move;
use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::chess_types::{Color, TerminalStatus};
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::move_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    /// The two-ply oscillation heuristic flagged the position.
    DrawRepetition,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn is_draw(self) -> bool {
        !matches!(
            self,
            MatchOutcome::WhiteWinCheckmate | MatchOutcome::BlackWinCheckmate
        )
    }
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Engine plies, not counting the random opening.
    pub max_plies: u16,
    pub opening_random_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_random_plies: 0,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

/// Play a single seeded engine-vs-engine match from the initial array.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(
        GameState::new_game(),
        engine_white,
        engine_black,
        seed,
        config,
    )
}

/// Play a single seeded engine-vs-engine match from a caller-provided state.
pub fn play_engine_match_from_state(
    mut state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let opening_moves_lan =
        apply_seeded_random_opening(&mut state, seed, config.opening_random_plies);

    let mut played_moves_lan = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;

    let mut outcome = MatchOutcome::DrawMaxPlies;
    for _ in 0..config.max_plies {
        let legal_moves = state.legal_moves();
        if let Some(finished) = outcome_of(&state, legal_moves.len()) {
            outcome = finished;
            break;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::White => engine_white.choose_move(&mut state, &config.go_params)?,
            Color::Black => engine_black.choose_move(&mut state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                white_move_count = white_move_count.saturating_add(1);
                white_total_time_ns = white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                black_move_count = black_move_count.saturating_add(1);
                black_total_time_ns = black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.unwrap_or(legal_moves[0]);
        state.try_apply_move(&chosen)?;
        let lan = move_to_algebraic(&chosen);
        tracing::debug!(
            ply = state.history().len(),
            ?mover,
            mv = %lan,
            score = ?out.score,
            "move played"
        );
        played_moves_lan.push(lan);
    }

    if outcome == MatchOutcome::DrawMaxPlies {
        // The last engine move may have ended the game on the final ply.
        let remaining = state.legal_moves().len();
        outcome = outcome_of(&state, remaining).unwrap_or(MatchOutcome::DrawMaxPlies);
    }

    tracing::info!(
        ?outcome,
        plies = played_moves_lan.len(),
        white = engine_white.name(),
        black = engine_black.name(),
        "match finished"
    );

    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_moves_lan,
        played_moves_lan,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Outcome for a position whose status was just derived, if the game is over.
fn outcome_of(state: &GameState, legal_move_count: usize) -> Option<MatchOutcome> {
    match state.status() {
        TerminalStatus::Checkmate => Some(match state.side_to_move() {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }),
        TerminalStatus::Stalemate if legal_move_count == 0 => Some(MatchOutcome::DrawStalemate),
        // Moves remain, so the repetition heuristic raised the flag.
        TerminalStatus::Stalemate => Some(MatchOutcome::DrawRepetition),
        TerminalStatus::Ongoing | TerminalStatus::Unknown => None,
    }
}

fn apply_seeded_random_opening(state: &mut GameState, seed: u64, plies: u8) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves_lan = Vec::<String>::new();

    for _ in 0..plies {
        let legal_moves = state.legal_moves();
        let Some(chosen) = random_move(&legal_moves, &mut rng) else {
            break;
        };
        opening_moves_lan.push(move_to_algebraic(&chosen));
        state.apply_move(&chosen);
    }

    opening_moves_lan
}
