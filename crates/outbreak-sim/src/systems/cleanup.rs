//! Cleanup system: despawns zombies whose hit points are gone.

use hecs::{Entity, World};

use outbreak_core::components::{Zombie, ZombieProfile};
use outbreak_core::events::GameEvent;

use crate::engine::ScoreState;

/// Remove dead zombies from the world. Uses a pre-allocated buffer to
/// avoid allocating every tick. Despawning drops the whole bundle,
/// attached particle burst included, in one step.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    despawn_buffer.clear();

    for (entity, (_tag, profile)) in world.query_mut::<(&Zombie, &ZombieProfile)>() {
        if profile.hp <= 0 {
            despawn_buffer.push(entity);
            events.push(GameEvent::ZombieSlain { id: profile.id });
            score.zombies_slain += 1;
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
