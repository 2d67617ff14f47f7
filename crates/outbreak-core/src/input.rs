//! Per-tick input snapshot.
//!
//! The simulation never sees key events. The shell polls its input source
//! once per tick and hands the engine a snapshot of which controls are
//! currently held: "is held?", never "was pressed?".

use serde::{Deserialize, Serialize};

/// Held-control snapshot consumed by `SimulationEngine::tick`.
///
/// Maps to the left/right/up/down/space keys of a keyboard shell.
/// All conditions are independent; holding opposing controls applies both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    /// Rotate counterclockwise (angle decreases).
    pub turn_left: bool,
    /// Rotate clockwise (angle increases).
    pub turn_right: bool,
    /// Move along the heading.
    pub forward: bool,
    /// Move against the heading.
    pub backward: bool,
    /// Fire a bolt (gated by the launcher cooldown).
    pub fire: bool,
}

impl InputState {
    /// Snapshot with nothing held.
    pub fn idle() -> Self {
        Self::default()
    }
}
