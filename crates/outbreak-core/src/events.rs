//! Events emitted by the simulation for shell feedback.
//!
//! Events are observability only and carry no simulation authority.
//! The engine drains them into each tick's snapshot.

use serde::{Deserialize, Serialize};

/// Gameplay events for logging and shell feedback (sound hooks, HUD flashes).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The player fired a bolt.
    ShotFired,
    /// A bolt struck a zombie.
    ZombieHit { id: u32, hp_left: i32 },
    /// A zombie's hit points reached zero and it was despawned.
    ZombieSlain { id: u32 },
    /// A zombie in contact with the player drew blood this tick.
    PlayerHurt { health_left: i32 },
    /// Player health reached zero; the simulation froze.
    GameOver { ticks_survived: u64 },
}
