//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::types::{Aabb, Body};

/// Cached collider, rebuilt from the owning entity's `Body` at the start
/// of that entity's update. Cross-entity overlap tests read this cached
/// box, so a mover's collider lags the move applied after the rebuild.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Collider(pub Aabb);

/// Player steering state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Helm {
    /// Facing angle in radians, normalized into [0, 2π).
    pub angle: f32,
    /// Derived heading: (cos angle, sin angle) * PLAYER_MOVE_SPEED.
    pub heading: Vec2,
}

/// A bolt in flight. Owned by the launcher that fired it, never a
/// registry entity of its own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bolt {
    pub body: Body,
    pub collider: Aabb,
    /// Flight angle, fixed at launch.
    pub angle: f32,
    /// Set on impact; the bolt is pruned on the next maintenance pass.
    pub hit: bool,
}

/// Player weapon state: cooldown gate plus the owned bolts in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Launcher {
    /// Ticks until the next shot is allowed (0 = ready).
    pub cooldown_ticks: u32,
    pub bolts: Vec<Bolt>,
}

/// Player health pool.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    /// Current health, floored at 0, never resurrected.
    pub current: i32,
    /// Health lost per damage tick.
    pub damage_per_hit: i32,
}

/// Per-zombie state. The entity this zombie chases rides the sim-side
/// `PursuitTarget` component, not this bundle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ZombieProfile {
    /// Spawn ordinal, stable for the zombie's lifetime. Snapshot views
    /// sort by it.
    pub id: u32,
    /// Hit points; the cleanup system despawns at <= 0.
    pub hp: i32,
    /// Set when a bolt connects; cleared once the attached particle
    /// system stops spawning.
    pub hit: bool,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a zombie entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Zombie;

// Body (types.rs) is used as a component too; every registry entity
// carries one alongside its Collider.
