//! Random self-play driver for profiling the engine under a realistic
//! move mix (placements, captures, rejections, passes).

use bitvec_go::game::Game;
use bitvec_go::player::Player;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

const GAMES: usize = 500;
const SIZE: usize = 9;

fn random_playout(rng: &mut StdRng) -> Game {
    let mut game = Game::new(SIZE);
    let mut rejected = 0;
    // Cap the playout: random play without superko can cycle.
    while !game.game_over() && game.move_count() < 6 * SIZE * SIZE {
        let x = rng.random_range(0..SIZE);
        let y = rng.random_range(0..SIZE);
        match game.play(x, y) {
            Ok(()) => rejected = 0,
            Err(_) => {
                rejected += 1;
                if rejected >= 4 * SIZE * SIZE {
                    game.pass().expect("pass");
                    rejected = 0;
                }
            }
        }
    }
    game
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut total_moves = 0usize;
    let mut total_prisoners = 0u32;

    let start = Instant::now();
    for _ in 0..GAMES {
        let game = random_playout(&mut rng);
        total_moves += game.move_count();
        total_prisoners += game.prisoners(Player::Black) + game.prisoners(Player::White);
    }
    let elapsed = start.elapsed();

    println!(
        "{} games of {}x{} in {:.2?} ({:.0} moves/s)",
        GAMES,
        SIZE,
        SIZE,
        elapsed,
        total_moves as f64 / elapsed.as_secs_f64()
    );
    println!(
        "avg {:.1} moves, {:.1} prisoners per game",
        total_moves as f64 / GAMES as f64,
        total_prisoners as f64 / GAMES as f64
    );
}
