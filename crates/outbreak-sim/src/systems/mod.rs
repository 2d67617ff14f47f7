//! ECS systems that advance the simulation each tick.
//!
//! Systems are free functions over `&mut World` (plus whatever engine
//! state they need). They hold no state of their own; the order they
//! run in is fixed by the engine and several of them depend on it.

pub mod cleanup;
pub mod effects;
pub mod player;
pub mod pursuit;
pub mod snapshot;
pub mod spawner;
