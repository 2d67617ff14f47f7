//! The OUTBREAK simulation: world, engine, and per-tick systems.
//!
//! Everything here is headless and deterministic; the shell feeds
//! [`SimulationEngine::tick`] one input snapshot per tick and renders
//! the [`FrameSnapshot`](outbreak_core::state::FrameSnapshot) it gets
//! back.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use outbreak_core as core;

pub use engine::SimulationEngine;
