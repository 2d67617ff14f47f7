//! A single short-lived particle.

use glam::Vec2;

/// One particle of an impact burst.
///
/// Particles are drawn as filled squares with side = truncated
/// `remaining_life`, so they visually shrink to nothing as they expire.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Current position (screen space, y down).
    pub pos: Vec2,
    /// Drift speed, copied from the owning system at spawn.
    pub velocity: Vec2,
    /// Decays by 0.1 per update; the particle is removed at <= 0.
    pub remaining_life: f32,
}

impl Particle {
    /// Drawn square side: the truncated remaining life.
    pub fn side(&self) -> f32 {
        self.remaining_life.trunc()
    }
}
