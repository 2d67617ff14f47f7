//! Impact-burst driver: ages the particle systems attached to zombies.
//!
//! Runs after cleanup, so only surviving zombies carry a burst into the
//! snapshot.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use outbreak_core::components::ZombieProfile;
use outbreak_core::types::Body;
use outbreak_fx::ParticleSystem;

/// Drive every attached burst one update from its owner's center. The
/// owner's hit flag clears once the burst stops spawning; the component
/// detaches once the burst is fully drained.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng) {
    let mut spent: Vec<Entity> = Vec::new();

    for (entity, (body, profile, burst)) in
        world.query_mut::<(&Body, &mut ZombieProfile, &mut ParticleSystem)>()
    {
        let spawning = burst.update(body.center(), rng);
        if !spawning {
            profile.hit = false;
        }
        if burst.is_spent() {
            spent.push(entity);
        }
    }

    for entity in spent {
        let _ = world.remove_one::<ParticleSystem>(entity);
    }
}
