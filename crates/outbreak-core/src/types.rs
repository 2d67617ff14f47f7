//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in screen space (pixels, y grows downward).
///
/// Value type with no identity; colliders are rebuilt from an entity's
/// current position rather than kept in sync incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Logical box of an entity: top-left corner plus extent.
/// Used both for movement and for collider reconstruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

/// RGB color passed to the render surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Aabb {
    /// Extents must be non-negative; negative values are a caller
    /// contract violation, checked only in debug builds.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        debug_assert!(w >= 0.0 && h >= 0.0, "Aabb extents must be >= 0");
        Self { x, y, w, h }
    }

    /// Strict interval-overlap test on both axes. Boxes that touch only
    /// at an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Collider for the current position.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }

    /// Center of the box (muzzle point, particle emit origin).
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Normalize an angle into `[0, 2π)` by wraparound.
pub fn wrap_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}
