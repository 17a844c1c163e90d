//! Headless engine-vs-engine self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play -- --white minimax --black greedy --depth 3`
//! `RUST_LOG=debug cargo run --release --bin self_play -- --seed 7`

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use plum_mailbox::chess_errors::ChessResult;
use plum_mailbox::engines::engine_greedy::GreedyEngine;
use plum_mailbox::engines::engine_minimax::MinimaxEngine;
use plum_mailbox::engines::engine_random::RandomEngine;
use plum_mailbox::engines::engine_trait::Engine;
use plum_mailbox::search::minimax::SearchConfig;
use plum_mailbox::utils::engine_match_harness::{play_engine_match, MatchConfig};
use plum_mailbox::utils::render_game_state::render_game_state;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    Random,
    Greedy,
    Minimax,
}

#[derive(Debug, Parser)]
#[command(about = "Play two engines against each other and print the game")]
struct Args {
    /// Engine playing White.
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    white: EngineKind,

    /// Engine playing Black.
    #[arg(long, value_enum, default_value_t = EngineKind::Greedy)]
    black: EngineKind,

    /// Minimax search depth in plies.
    #[arg(long, default_value_t = 3)]
    depth: u8,

    /// Seed for the engines and the random opening.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Engine plies before the game is called a draw.
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Random plies played before the engines take over.
    #[arg(long, default_value_t = 0)]
    opening_plies: u8,

    /// Log every move (same as RUST_LOG=debug).
    #[arg(short, long)]
    verbose: bool,
}

fn build_engine(kind: EngineKind, depth: u8, seed: u64) -> Box<dyn Engine> {
    match kind {
        EngineKind::Random => Box::new(RandomEngine::new(seed)),
        EngineKind::Greedy => Box::new(GreedyEngine::new(seed)),
        EngineKind::Minimax => Box::new(MinimaxEngine::new(
            SearchConfig {
                max_depth: depth,
                ..SearchConfig::default()
            },
            seed,
        )),
    }
}

fn main() -> ChessResult<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let mut white = build_engine(args.white, args.depth, args.seed);
    let mut black = build_engine(args.black, args.depth, args.seed.wrapping_add(1));

    let config = MatchConfig {
        max_plies: args.max_plies,
        opening_random_plies: args.opening_plies,
        ..MatchConfig::default()
    };
    let result = play_engine_match(white.as_mut(), black.as_mut(), args.seed, &config)?;

    println!("{}", render_game_state(&result.final_state));
    if !result.opening_moves_lan.is_empty() {
        println!("opening: {}", result.opening_moves_lan.join(" "));
    }
    println!("moves: {}", result.played_moves_lan.join(" "));
    println!("outcome: {:?}", result.outcome);
    println!(
        "avg ms/move: white {:.3} black {:.3}",
        avg_ms(result.white_total_time_ns, result.white_move_count),
        avg_ms(result.black_total_time_ns, result.black_move_count)
    );
    Ok(())
}

fn avg_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
