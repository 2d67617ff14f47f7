//! OUTBREAK shell.
//!
//! Wires the simulation engine to the outside world: a fixed-timestep
//! loop, input sources, and the presentation pass that turns frame
//! snapshots into draw calls.

pub mod logging;
pub mod render;
pub mod runtime;

pub use outbreak_core as core;
