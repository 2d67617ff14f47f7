//! Presentation pass: turns a frame snapshot into ordered draw calls.
//!
//! The pass knows nothing about the ECS world; it consumes the
//! snapshot exactly as published. Draw order is part of the contract:
//! later calls paint over earlier ones.

use glam::Vec2;
use serde::Serialize;

use outbreak_core::constants::{FIELD_HEIGHT, FIELD_WIDTH};
use outbreak_core::state::FrameSnapshot;
use outbreak_core::types::Color;

// --- Palette ---

pub const BACKGROUND: Color = Color::new(0, 0, 0);
pub const PLAYER_COLOR: Color = Color::new(255, 255, 255);
pub const ZOMBIE_COLOR: Color = Color::new(0, 255, 0);
pub const BOLT_COLOR: Color = Color::new(255, 255, 0);
/// Aim line, health fill, and blood particles.
pub const BLOOD_COLOR: Color = Color::new(255, 0, 0);

// --- HUD layout ---

const HEALTH_BAR_POS: Vec2 = Vec2::new(10.0, 10.0);
const HEALTH_BAR_HEIGHT: f32 = 5.0;
/// Backplate width; the fill maps one pixel per health point.
const HEALTH_BAR_WIDTH: f32 = 100.0;

const AIM_LINE_SCALE: f32 = 3.0;
const AIM_LINE_WIDTH: f32 = 2.0;

/// Minimal drawing backend: filled axis-aligned rects and one line
/// primitive, in screen space (y down).
pub trait Surface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color);
}

/// Draw one complete frame.
///
/// Order: background, bolts, player, aim line, health bar, then per
/// zombie its particles followed by its rect. Particles whose truncated
/// side has reached zero are skipped, not drawn at zero size.
pub fn draw_frame(snapshot: &FrameSnapshot, surface: &mut impl Surface) {
    surface.fill_rect(
        Vec2::ZERO,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        BACKGROUND,
    );

    for bolt in &snapshot.bolts {
        surface.fill_rect(bolt.pos, bolt.size, BOLT_COLOR);
    }

    let player = &snapshot.player;
    surface.fill_rect(player.pos, player.size, PLAYER_COLOR);

    let center = player.pos + player.size * 0.5;
    surface.line(
        center,
        center + player.heading * AIM_LINE_SCALE,
        AIM_LINE_WIDTH,
        BLOOD_COLOR,
    );

    surface.fill_rect(
        HEALTH_BAR_POS,
        Vec2::new(HEALTH_BAR_WIDTH, HEALTH_BAR_HEIGHT),
        PLAYER_COLOR,
    );
    surface.fill_rect(
        HEALTH_BAR_POS,
        Vec2::new(player.health as f32, HEALTH_BAR_HEIGHT),
        BLOOD_COLOR,
    );

    for zombie in &snapshot.zombies {
        for particle in &zombie.particles {
            if particle.side > 0.0 {
                surface.fill_rect(particle.pos, Vec2::splat(particle.side), BLOOD_COLOR);
            }
        }
        surface.fill_rect(zombie.pos, zombie.size, ZOMBIE_COLOR);
    }
}

/// A captured draw call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawOp {
    Rect {
        pos: Vec2,
        size: Vec2,
        color: Color,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
}

/// Records draw calls in order. Backs tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.ops.push(DrawOp::Rect { pos, size, color });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Discards every draw call.
#[derive(Debug, Default)]
pub struct NullSurface;

impl Surface for NullSurface {
    fn fill_rect(&mut self, _pos: Vec2, _size: Vec2, _color: Color) {}

    fn line(&mut self, _from: Vec2, _to: Vec2, _width: f32, _color: Color) {}
}
