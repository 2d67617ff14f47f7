//! Player system: steering, movement, firing, and bolt maintenance.
//!
//! Runs first in the tick. It rebuilds the player's collider before
//! moving, so pursuit later this tick tests against the player's
//! pre-move box, while the player tests movement and bolt hits against
//! the zombie colliders cached on their last rebuild.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use outbreak_core::components::{Bolt, Collider, Helm, Launcher, Zombie, ZombieProfile};
use outbreak_core::constants::{
    BOLT_DAMAGE, BOLT_SIZE, BOLT_SPEED, FIELD_HEIGHT, FIELD_WIDTH, FIRE_COOLDOWN_TICKS,
    PLAYER_MOVE_SPEED, PLAYER_TURN_RATE,
};
use outbreak_core::events::GameEvent;
use outbreak_core::input::InputState;
use outbreak_core::types::{wrap_angle, Aabb, Body};
use outbreak_fx::ParticleSystem;

use crate::engine::ScoreState;

/// Advance the player by one tick.
pub fn run(
    world: &mut World,
    player: Entity,
    input: &InputState,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    score: &mut ScoreState,
) {
    // Zombie colliders as of their last rebuild.
    let zombies: Vec<(Entity, Aabb)> = world
        .query::<(&Zombie, &Collider)>()
        .iter()
        .map(|(entity, (_tag, collider))| (entity, collider.0))
        .collect();

    // Bolt impacts to apply once the player borrow is released.
    let mut impacts: Vec<(f32, Entity)> = Vec::new();

    if let Ok((body, collider, helm, launcher)) =
        world.query_one_mut::<(&mut Body, &mut Collider, &mut Helm, &mut Launcher)>(player)
    {
        collider.0 = body.aabb();

        steer(helm, input);
        translate(body, helm, input, &zombies);

        if input.fire && launcher.cooldown_ticks == 0 {
            fire(body, helm, launcher);
            score.shots_fired += 1;
            events.push(GameEvent::ShotFired);
        }
        if launcher.cooldown_ticks > 0 {
            launcher.cooldown_ticks -= 1;
        }

        maintain_bolts(launcher, &zombies, &mut impacts);
    }

    apply_impacts(world, rng, impacts, events);
}

/// Both turn inputs apply in the same tick; the heading vector is kept
/// in lockstep with the angle.
fn steer(helm: &mut Helm, input: &InputState) {
    if input.turn_left {
        helm.angle = wrap_angle(helm.angle - PLAYER_TURN_RATE);
    }
    if input.turn_right {
        helm.angle = wrap_angle(helm.angle + PLAYER_TURN_RATE);
    }
    helm.heading = Vec2::from_angle(helm.angle) * PLAYER_MOVE_SPEED;
}

/// Forward and backward translation. Each is a whole move: rejected
/// outright if the candidate box overlaps any zombie, otherwise clamped
/// to the field one axis at a time.
fn translate(body: &mut Body, helm: &Helm, input: &InputState, zombies: &[(Entity, Aabb)]) {
    if input.forward {
        let candidate = body.pos + helm.heading;
        try_move(body, candidate, zombies);
    }
    if input.backward {
        let candidate = body.pos - helm.heading;
        try_move(body, candidate, zombies);
    }
}

fn try_move(body: &mut Body, candidate: Vec2, zombies: &[(Entity, Aabb)]) {
    let probe = Aabb::new(candidate.x, candidate.y, body.size.x, body.size.y);
    if zombies.iter().any(|(_, collider)| probe.overlaps(collider)) {
        return;
    }
    if candidate.x >= 0.0 && candidate.x + body.size.x <= FIELD_WIDTH {
        body.pos.x = candidate.x;
    }
    if candidate.y >= 0.0 && candidate.y + body.size.y <= FIELD_HEIGHT {
        body.pos.y = candidate.y;
    }
}

/// Spawn a bolt at the player's center, aimed along the current angle,
/// and start the cooldown.
fn fire(body: &Body, helm: &Helm, launcher: &mut Launcher) {
    let muzzle = body.center();
    launcher.bolts.push(Bolt {
        body: Body::new(muzzle, Vec2::splat(BOLT_SIZE)),
        collider: Aabb::new(muzzle.x, muzzle.y, BOLT_SIZE, BOLT_SIZE),
        angle: helm.angle,
        hit: false,
    });
    launcher.cooldown_ticks = FIRE_COOLDOWN_TICKS;
}

/// Prune spent bolts, then advance the survivors: rebuild the collider,
/// step along the flight angle, and test the pre-step collider against
/// every zombie. A bolt that connects is flagged and pruned on the next
/// pass; it damages at most one zombie per tick.
fn maintain_bolts(
    launcher: &mut Launcher,
    zombies: &[(Entity, Aabb)],
    impacts: &mut Vec<(f32, Entity)>,
) {
    launcher.bolts.retain(|bolt| !bolt.hit && !off_field(bolt));

    for bolt in &mut launcher.bolts {
        bolt.collider = bolt.body.aabb();
        bolt.body.pos += Vec2::from_angle(bolt.angle) * BOLT_SPEED;
        for (zombie, collider) in zombies {
            if bolt.collider.overlaps(collider) {
                bolt.hit = true;
                impacts.push((bolt.angle, *zombie));
                break;
            }
        }
    }
}

/// A bolt is spent once its box lies fully outside the field.
fn off_field(bolt: &Bolt) -> bool {
    let b = &bolt.body;
    b.pos.x + b.size.x < 0.0
        || b.pos.x > FIELD_WIDTH
        || b.pos.y + b.size.y < 0.0
        || b.pos.y > FIELD_HEIGHT
}

/// Apply collected impacts: damage, the hit flag, and a fresh burst on
/// the victim. A second impact on the same zombie replaces its burst.
fn apply_impacts(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    impacts: Vec<(f32, Entity)>,
    events: &mut Vec<GameEvent>,
) {
    for (angle, entity) in impacts {
        let struck = match world.get::<&mut ZombieProfile>(entity) {
            Ok(mut profile) => {
                profile.hp -= BOLT_DAMAGE;
                profile.hit = true;
                Some((profile.id, profile.hp))
            }
            Err(_) => None,
        };
        if let Some((id, hp_left)) = struck {
            events.push(GameEvent::ZombieHit { id, hp_left });
            let _ = world.insert_one(entity, ParticleSystem::burst(angle, rng));
        }
    }
}
