//! Headless driver for the simulation core
//!
//! Runs each level of the bundled demo pack at a fixed timestep. This is the
//! external-driver contract in miniature: pace ticks, read level state, stop
//! once the level reports finished. No rendering, no input.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use gridfall::consts::SIM_DT;
use gridfall::levels::LevelPack;
use gridfall::sim::{LevelParser, Outcome, tick};

/// One simulated minute per level before giving up
const MAX_TICKS: u32 = 60 * 60;

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random);
    log::info!("running demo pack with seed {seed}");

    let pack = LevelPack::demo();
    let parser = LevelParser::default();
    let mut rng = Pcg32::seed_from_u64(seed);

    for (index, plan) in pack.plans.iter().enumerate() {
        let mut level = parser.parse(plan, &mut rng);
        log::info!(
            "level {index}: {}x{} grid, {} actors",
            level.width(),
            level.height(),
            level.actors.len()
        );

        let mut ticks = 0;
        while !level.is_finished() && ticks < MAX_TICKS {
            tick(&mut level, SIM_DT);
            ticks += 1;
        }

        match level.status {
            Some(Outcome::Won) => println!("level {index}: won after {ticks} ticks"),
            Some(Outcome::Lost) => println!("level {index}: lost after {ticks} ticks"),
            None => println!("level {index}: no outcome after {ticks} ticks (player idle)"),
        }
    }
}
