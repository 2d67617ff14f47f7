//! Control commands sent from the shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary, before any
//! system runs. Held-key input travels separately as an `InputState`
//! snapshot; commands are for discrete phase control only.

use serde::{Deserialize, Serialize};

/// All discrete control actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    /// Pause the simulation (only while Active).
    Pause,
    /// Resume the simulation (only while Paused).
    Resume,
    /// Tear down the world and start a fresh run. Valid in any phase;
    /// the RNG stream continues rather than reseeding.
    Restart,
}
