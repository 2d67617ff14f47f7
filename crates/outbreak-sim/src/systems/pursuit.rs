//! Zombie pursuit: close on the player at unit speed, or stand and bite.

use glam::Vec2;
use hecs::{Entity, World};

use outbreak_core::components::{Collider, Health, Player, Zombie};
use outbreak_core::constants::ZOMBIE_STEP;
use outbreak_core::events::GameEvent;
use outbreak_core::types::{Aabb, Body};

/// Non-owning reference to the entity a zombie pursues. Defined here
/// rather than with the core components because entity ids are not
/// serde-derivable; the snapshot never carries it.
#[derive(Debug, Clone, Copy)]
pub struct PursuitTarget(pub Entity);

/// Advance every zombie by one tick.
///
/// Each zombie rebuilds its collider first. A zombie whose fresh box
/// overlaps any player's collider bites (one damage tick) and holds its
/// ground; otherwise it steps one unit along the atan2 bearing from its
/// top-left corner to its target's.
pub fn run(world: &mut World, events: &mut Vec<GameEvent>) {
    // The player system already rebuilt this tick's player collider.
    let players: Vec<(Entity, Vec2, Aabb)> = world
        .query::<(&Player, &Body, &Collider)>()
        .iter()
        .map(|(entity, (_tag, body, collider))| (entity, body.pos, collider.0))
        .collect();
    if players.is_empty() {
        return;
    }

    let mut bites: Vec<Entity> = Vec::new();

    for (_entity, (_tag, body, collider, target)) in
        world.query_mut::<(&Zombie, &mut Body, &mut Collider, &PursuitTarget)>()
    {
        collider.0 = body.aabb();

        if let Some(&(victim, _, _)) = players.iter().find(|(_, _, pc)| collider.0.overlaps(pc)) {
            bites.push(victim);
            continue;
        }

        // A stale target id leaves the zombie standing.
        if let Some(&(_, target_pos, _)) = players.iter().find(|(e, _, _)| *e == target.0) {
            let bearing = (target_pos.y - body.pos.y).atan2(target_pos.x - body.pos.x);
            body.pos += Vec2::from_angle(bearing) * ZOMBIE_STEP;
        }
    }

    for victim in bites {
        if let Ok(mut health) = world.get::<&mut Health>(victim) {
            health.current = (health.current - health.damage_per_hit).max(0);
            events.push(GameEvent::PlayerHurt {
                health_left: health.current,
            });
        }
    }
}
