//! Particle effects for OUTBREAK.
//!
//! Implements the impact-burst particle simulation: a budgeted emitter
//! that sprays short-lived shrinking particles along a hit angle. The
//! crate is plain data plus update functions; the sim layer owns where
//! bursts attach and when they are driven.

pub mod particle;
pub mod system;

pub use outbreak_core as core;

pub use particle::Particle;
pub use system::{EmitterPhase, ParticleSystem};
