//! Shared vocabulary for the OUTBREAK crates.
//!
//! Everything the simulation and the shell both need to name lives
//! here: geometric types, components, constants, enums, input and
//! command types, events, and the snapshot views. No runtime or
//! graphics dependency.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
