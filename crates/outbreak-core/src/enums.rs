//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// The simulation runs only while `Active`; `Paused` and `GameOver` freeze
/// time and all systems. `GameOver` is terminal until a Restart command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Active,
    Paused,
    GameOver,
}

/// Which side of the field an edge spawn appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpawnEdge {
    Left,
    Right,
}
