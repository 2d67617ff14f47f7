//! Read-only views of everything visible in one tick.
//!
//! The presentation pass and the tests consume snapshots; nothing ever
//! reaches back into the ECS world from outside the sim crate.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::SimTime;

/// Complete per-tick state view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    /// Zombies sorted by spawn ordinal.
    pub zombies: Vec<ZombieView>,
    pub bolts: Vec<BoltView>,
    pub score: ScoreView,
    /// Events emitted during this tick, in emission order.
    pub events: Vec<GameEvent>,
}

/// The player as the presentation pass needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    /// Top-left corner of the player box.
    pub pos: Vec2,
    pub size: Vec2,
    /// Facing angle in radians, [0, 2π).
    pub angle: f32,
    /// Heading vector; the aim line runs from the box center to
    /// center + heading * 3.
    pub heading: Vec2,
    pub health: i32,
    pub max_health: i32,
    /// Ticks until the next shot is allowed.
    pub cooldown_ticks: u32,
}

/// One zombie plus the particles of its attached effect (if any).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZombieView {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub hit: bool,
    /// Drawn under the zombie rect, in spawn order.
    pub particles: Vec<ParticleView>,
}

/// A bolt in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoltView {
    pub pos: Vec2,
    pub size: Vec2,
    pub angle: f32,
}

/// One particle, already reduced to its drawn form: a square of
/// side = truncated remaining life.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ParticleView {
    pub pos: Vec2,
    pub side: f32,
}

/// Running score.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub zombies_spawned: u32,
    pub zombies_slain: u32,
    pub shots_fired: u32,
}
