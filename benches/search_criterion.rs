use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_mailbox::game_state::game_state::GameState;
use plum_mailbox::search::board_scoring::PositionalMaterialScorer;
use plum_mailbox::search::greedy::greedy_search;
use plum_mailbox::search::minimax::{minimax_full_width, minimax_search, SearchConfig};

fn bench_minimax(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax_start_position");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for depth in 1..=3u8 {
        let mut game = GameState::new_game();

        // Correctness guard: pruning must not change the root score.
        let mut rng = StdRng::seed_from_u64(0);
        let config = SearchConfig {
            max_depth: depth,
            ..SearchConfig::default()
        };
        let pruned = minimax_search(&mut game, &PositionalMaterialScorer, config, &mut rng);
        let full = minimax_full_width(&mut game, &PositionalMaterialScorer, depth);
        assert_eq!(pruned.best_score, full, "score mismatch at depth {depth}");

        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| {
                let result = minimax_search(
                    black_box(&mut game),
                    &PositionalMaterialScorer,
                    config,
                    &mut rng,
                );
                black_box(result.best_move)
            });
        });
    }

    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut game = GameState::new_game();
    let mut rng = StdRng::seed_from_u64(0);

    c.bench_function("greedy_start_position", |b| {
        b.iter(|| {
            let result = greedy_search(black_box(&mut game), &PositionalMaterialScorer, &mut rng);
            black_box(result.best_move)
        });
    });
}

criterion_group!(benches, bench_minimax, bench_greedy);
criterion_main!(benches);
