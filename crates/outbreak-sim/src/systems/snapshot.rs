//! Builds the per-tick [`FrameSnapshot`] from read-only world queries.
//!
//! Runs every tick regardless of phase, so paused and game-over frames
//! still publish a complete view.

use hecs::World;

use outbreak_core::components::{Health, Helm, Launcher, Player, Zombie, ZombieProfile};
use outbreak_core::constants::PLAYER_MAX_HEALTH;
use outbreak_core::enums::GamePhase;
use outbreak_core::events::GameEvent;
use outbreak_core::state::{
    BoltView, FrameSnapshot, ParticleView, PlayerView, ScoreView, ZombieView,
};
use outbreak_core::types::{Body, SimTime};
use outbreak_fx::ParticleSystem;

use crate::engine::ScoreState;

/// Build a complete snapshot of the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        phase,
        player: build_player(world),
        zombies: build_zombies(world),
        bolts: build_bolts(world),
        score: ScoreView {
            zombies_spawned: score.zombies_spawned,
            zombies_slain: score.zombies_slain,
            shots_fired: score.shots_fired,
        },
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Body, &Helm, &Launcher, &Health)>()
        .iter()
        .next()
        .map(|(_, (_tag, body, helm, launcher, health))| PlayerView {
            pos: body.pos,
            size: body.size,
            angle: helm.angle,
            heading: helm.heading,
            health: health.current,
            max_health: PLAYER_MAX_HEALTH,
            cooldown_ticks: launcher.cooldown_ticks,
        })
        .unwrap_or_default()
}

fn build_zombies(world: &World) -> Vec<ZombieView> {
    let mut zombies: Vec<ZombieView> = world
        .query::<(&Zombie, &Body, &ZombieProfile, Option<&ParticleSystem>)>()
        .iter()
        .map(|(_, (_tag, body, profile, burst))| ZombieView {
            id: profile.id,
            pos: body.pos,
            size: body.size,
            hp: profile.hp,
            hit: profile.hit,
            particles: burst.map(build_particles).unwrap_or_default(),
        })
        .collect();

    // Stable order for rendering and for snapshot comparison in tests.
    zombies.sort_by_key(|z| z.id);
    zombies
}

fn build_particles(burst: &ParticleSystem) -> Vec<ParticleView> {
    burst
        .particles
        .iter()
        .map(|p| ParticleView {
            pos: p.pos,
            side: p.side(),
        })
        .collect()
}

fn build_bolts(world: &World) -> Vec<BoltView> {
    let mut bolts = Vec::new();
    for (_, (_tag, launcher)) in world.query::<(&Player, &Launcher)>().iter() {
        for bolt in &launcher.bolts {
            bolts.push(BoltView {
                pos: bolt.body.pos,
                size: bolt.body.size,
                angle: bolt.angle,
            });
        }
    }
    bolts
}
