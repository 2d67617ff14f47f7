//! Edge spawner: feeds one zombie into the field at a fixed cadence.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use outbreak_core::constants::SPAWN_INTERVAL_TICKS;

use crate::engine::ScoreState;
use crate::world_setup;

/// Countdown state for the edge spawner. Owned by the engine so the
/// cadence survives pause and resets on restart.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpawnClock {
    /// Ticks until the next spawn; 0 means spawn this tick.
    pub countdown: u32,
    /// Ordinal handed to the next zombie.
    pub next_id: u32,
}

/// Spawn a zombie whenever the countdown hits zero (the first tick
/// included), then rewind it. The countdown always decrements, so the
/// cadence is exactly one spawn per `SPAWN_INTERVAL_TICKS`. New zombies
/// pursue `player`.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    clock: &mut SpawnClock,
    score: &mut ScoreState,
    player: Entity,
) {
    if clock.countdown == 0 {
        let id = clock.next_id;
        clock.next_id += 1;
        let entity = world_setup::spawn_edge_zombie(world, rng, id, player);
        score.zombies_spawned += 1;
        clock.countdown = SPAWN_INTERVAL_TICKS;
        log::debug!("zombie {id} spawned as {entity:?}");
    }
    clock.countdown -= 1;
}
