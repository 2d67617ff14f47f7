//! Budgeted particle emitter with a three-phase lifecycle.

use glam::Vec2;
use rand::Rng;

use outbreak_core::constants::{
    PARTICLE_DRIFT_X, PARTICLE_DRIFT_Y_MAX, PARTICLE_EMIT_BUDGET, PARTICLE_LIFE_DECAY,
    PARTICLE_LIFE_MAX, PARTICLE_LIFE_MIN, PARTICLE_SPREAD_STEPS,
};

use crate::particle::Particle;

/// Lifecycle phase of a particle system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterPhase {
    /// Still emitting one particle per update.
    Spawning,
    /// Budget exhausted; existing particles are still aging out.
    Draining,
    /// No particles left. Terminal.
    Empty,
}

/// An impact burst attached to a zombie when a bolt connects.
///
/// Each update emits at most one particle (while the budget lasts) at the
/// owner's current center, then ages every live particle: position drifts
/// along a randomly deviated copy of the hit angle, life decays by 0.1,
/// and expired particles are dropped.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
    /// Base drift angle (the angle of the bolt that caused the burst).
    pub angle: f32,
    /// Shared drift speed copied into each spawned particle.
    pub velocity: Vec2,
    /// Total updates that emit a particle.
    pub emit_budget: u32,
    /// Updates that have emitted so far.
    pub emitted: u32,
}

impl ParticleSystem {
    pub fn new(angle: f32, velocity: Vec2, emit_budget: u32) -> Self {
        Self {
            particles: Vec::with_capacity(emit_budget as usize),
            angle,
            velocity,
            emit_budget,
            emitted: 0,
        }
    }

    /// Standard impact burst: along-angle drift of 2 px/update, cross
    /// drift sampled once in [-1, 1], default emit budget.
    pub fn burst(angle: f32, rng: &mut impl Rng) -> Self {
        let cross = rng.gen_range(-PARTICLE_DRIFT_Y_MAX..=PARTICLE_DRIFT_Y_MAX);
        Self::new(angle, Vec2::new(PARTICLE_DRIFT_X, cross), PARTICLE_EMIT_BUDGET)
    }

    /// Whether the system is still in its spawning phase. The owner clears
    /// its `hit` flag the first time this goes false.
    pub fn spawning(&self) -> bool {
        self.emitted < self.emit_budget
    }

    /// Fully drained: budget spent and every particle expired.
    pub fn is_spent(&self) -> bool {
        !self.spawning() && self.particles.is_empty()
    }

    pub fn phase(&self) -> EmitterPhase {
        if self.spawning() {
            EmitterPhase::Spawning
        } else if self.particles.is_empty() {
            EmitterPhase::Empty
        } else {
            EmitterPhase::Draining
        }
    }

    /// Advance the burst by one tick.
    ///
    /// `origin` is the owner's current box center, so spawned particles
    /// track the owner as it moves. Each live particle (including one
    /// spawned this call) samples its own deviation from the base angle,
    /// uniform over the 251 hundredth-radian steps in [angle - 2.5, angle],
    /// then drifts by `(cos(dev) * vx, -sin(dev) * vy)`; the y sign flip
    /// matches the screen-space y-down convention.
    ///
    /// Returns `spawning()` after this update.
    pub fn update(&mut self, origin: Vec2, rng: &mut impl Rng) -> bool {
        if self.spawning() {
            self.particles.push(Particle {
                pos: origin,
                velocity: self.velocity,
                remaining_life: rng.gen_range(PARTICLE_LIFE_MIN..PARTICLE_LIFE_MAX),
            });
            self.emitted += 1;
        }

        let angle = self.angle;
        self.particles.retain_mut(|p| {
            let deviation = angle - rng.gen_range(0..=PARTICLE_SPREAD_STEPS) as f32 / 100.0;
            p.pos.x += deviation.cos() * p.velocity.x;
            p.pos.y -= deviation.sin() * p.velocity.y;
            p.remaining_life -= PARTICLE_LIFE_DECAY;
            p.remaining_life > 0.0
        });

        self.spawning()
    }
}
