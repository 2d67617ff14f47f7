//! Entity spawn factories for setting up the simulation world.

use glam::Vec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::components::{Collider, Health, Helm, Launcher, Player, Zombie, ZombieProfile};
use outbreak_core::constants::{
    CONTACT_DAMAGE, FIELD_HEIGHT, FIELD_WIDTH, PLAYER_MAX_HEALTH, PLAYER_MOVE_SPEED, PLAYER_SIZE,
    SPAWN_EDGE_OFFSET, ZOMBIE_MAX_HP, ZOMBIE_SIZE,
};
use outbreak_core::enums::SpawnEdge;
use outbreak_core::types::Body;

use crate::systems::pursuit::PursuitTarget;

/// Spawn the player at the field center, facing along +x.
pub fn spawn_player(world: &mut World) -> Entity {
    let body = Body::new(
        Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
        Vec2::splat(PLAYER_SIZE),
    );
    let helm = Helm {
        angle: 0.0,
        heading: Vec2::new(PLAYER_MOVE_SPEED, 0.0),
    };
    world.spawn((
        Player,
        body,
        Collider(body.aabb()),
        helm,
        Launcher::default(),
        Health {
            current: PLAYER_MAX_HEALTH,
            damage_per_hit: CONTACT_DAMAGE,
        },
    ))
}

/// Spawn one zombie just outside a horizontal field edge, at a height
/// drawn uniformly from the full field. `target` is the entity the
/// zombie will pursue.
pub fn spawn_edge_zombie(world: &mut World, rng: &mut ChaCha8Rng, id: u32, target: Entity) -> Entity {
    let edge = if rng.gen_bool(0.5) {
        SpawnEdge::Left
    } else {
        SpawnEdge::Right
    };
    let x = match edge {
        SpawnEdge::Left => -SPAWN_EDGE_OFFSET,
        SpawnEdge::Right => FIELD_WIDTH + SPAWN_EDGE_OFFSET,
    };
    let y = rng.gen_range(0.0..=FIELD_HEIGHT);
    spawn_zombie_at(world, Vec2::new(x, y), id, target)
}

/// Spawn a zombie at an exact position with full hit points.
pub fn spawn_zombie_at(world: &mut World, pos: Vec2, id: u32, target: Entity) -> Entity {
    let body = Body::new(pos, Vec2::splat(ZOMBIE_SIZE));
    world.spawn((
        Zombie,
        body,
        Collider(body.aabb()),
        ZombieProfile {
            id,
            hp: ZOMBIE_MAX_HP,
            hit: false,
        },
        PursuitTarget(target),
    ))
}
