//! AI decision and self-play throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use spit_engine::ai::{play_out, take_turn, GreedyPolicy, RandomPolicy};
use spit_engine::core::{GameRng, GameState, Side};
use spit_engine::rules::SpitRules;

fn bench_greedy_tick(c: &mut Criterion) {
    let state = GameState::new(42);

    c.bench_function("greedy_tick", |b| {
        b.iter(|| {
            let mut state = state.clone();
            let mut rng = GameRng::new(0);
            black_box(take_turn(&SpitRules, &mut state, &GreedyPolicy, Side::Ai, &mut rng))
        })
    });
}

fn bench_play_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("play_out");

    group.bench_function("greedy_vs_greedy", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            let mut rng = GameRng::new(7);
            play_out(&SpitRules, &mut state, &GreedyPolicy, &GreedyPolicy, &mut rng, 1_000)
        })
    });

    group.bench_function("random_vs_greedy", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            let mut rng = GameRng::new(7);
            play_out(&SpitRules, &mut state, &RandomPolicy, &GreedyPolicy, &mut rng, 1_000)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_greedy_tick, bench_play_out);
criterion_main!(benches);
