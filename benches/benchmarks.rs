use bitvec_go::bitvec::BitVector;
use bitvec_go::game::Game;
use bitvec_go::geometry::Geometry;
use criterion::{criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

/// Play ~20 random legal moves on a fresh game to create a realistic
/// mid-game position. Uses a fixed seed for reproducibility across runs.
fn setup_midgame(size: usize) -> Game {
    let mut game = Game::new(size);
    let mut rng = StdRng::seed_from_u64(42);
    let mut placed = 0;
    while placed < 20 {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        if game.play(x, y).is_ok() {
            placed += 1;
        }
    }
    game
}

fn first_open_point(game: &Game) -> (usize, usize) {
    for y in 0..game.size() {
        for x in 0..game.size() {
            if game.at(x, y).is_none() {
                return (x, y);
            }
        }
    }
    unreachable!("midgame board is full");
}

// ---------------------------------------------------------------------------
// Microbenchmarks
// ---------------------------------------------------------------------------

fn bench_play_9x9(c: &mut Criterion) {
    let game = setup_midgame(9);
    let (x, y) = first_open_point(&game);
    c.bench_function("play_9x9", |b| {
        b.iter_batched(
            || {
                let mut g = Game::new(9);
                for mv in game.move_history() {
                    g.make_move(mv).expect("replay");
                }
                g
            },
            |mut g| {
                black_box(g.play(x, y)).expect("open point");
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_dilate_19x19(c: &mut Criterion) {
    let geo = Geometry::new(19);
    let mut mask = BitVector::new(19 * 19);
    for idx in [0usize, 40, 41, 60, 180, 200, 360] {
        mask.set(idx);
    }
    c.bench_function("dilate_19x19", |b| b.iter(|| black_box(geo.dilate(&mask))));
}

fn bench_flood_fill_19x19(c: &mut Criterion) {
    let geo = Geometry::new(19);
    // A long snake of connected stones: worst case for the fixed-point loop.
    let mut within = BitVector::new(19 * 19);
    for i in 0..19 {
        within.set(i);
    }
    for row in 1..19 {
        within.set(row * 19 + if row % 2 == 0 { 0 } else { 18 });
    }
    let seed = BitVector::with_bit(19 * 19, 0);
    c.bench_function("flood_fill_19x19", |b| {
        b.iter(|| black_box(geo.flood_fill(&seed, &within)))
    });
}

// ---------------------------------------------------------------------------
// Integration benchmarks
// ---------------------------------------------------------------------------

fn random_playout(size: usize, seed: u64) -> Game {
    let mut game = Game::new(size);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rejected = 0;
    // The engine has no move limit of its own, so cap the driver: random
    // play without superko can cycle through repeated captures.
    while !game.game_over() && game.move_count() < 6 * size * size {
        let x = rng.random_range(0..size);
        let y = rng.random_range(0..size);
        match game.play(x, y) {
            Ok(()) => rejected = 0,
            Err(_) => {
                rejected += 1;
                // Random play has stalled; treat it as having no move left.
                if rejected >= 4 * size * size {
                    game.pass().expect("pass");
                    rejected = 0;
                }
            }
        }
    }
    game
}

fn bench_random_playout_9x9(c: &mut Criterion) {
    c.bench_function("random_playout_9x9", |b| {
        b.iter(|| black_box(random_playout(9, 123)))
    });
}

fn bench_random_playout_19x19(c: &mut Criterion) {
    c.bench_function("random_playout_19x19", |b| {
        b.iter(|| black_box(random_playout(19, 123)))
    });
}

criterion_group!(
    benches,
    bench_play_9x9,
    bench_dilate_19x19,
    bench_flood_fill_19x19,
    bench_random_playout_9x9,
    bench_random_playout_19x19,
);
criterion_main!(benches);
