//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

/// Field width in pixels.
pub const FIELD_WIDTH: f32 = 1280.0;

/// Field height in pixels.
pub const FIELD_HEIGHT: f32 = 512.0;

// --- Player ---

/// Player box side length (square).
pub const PLAYER_SIZE: f32 = 15.0;

/// Rotation applied per tick per held turn key (radians).
pub const PLAYER_TURN_RATE: f32 = 0.04;

/// Heading magnitude: pixels moved per tick of forward/backward input.
pub const PLAYER_MOVE_SPEED: f32 = 5.0;

/// Starting and maximum player health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Health lost per tick of zombie contact.
pub const CONTACT_DAMAGE: i32 = 1;

/// Firing cooldown in seconds.
pub const FIRE_COOLDOWN_SECS: f32 = 0.5;

/// Firing cooldown in ticks (30 at 60 Hz).
pub const FIRE_COOLDOWN_TICKS: u32 = (TICK_RATE as f32 * FIRE_COOLDOWN_SECS) as u32;

// --- Bolts ---

/// Bolt box side length (square).
pub const BOLT_SIZE: f32 = 5.0;

/// Bolt speed in pixels per tick.
pub const BOLT_SPEED: f32 = 5.0;

/// Damage dealt by one bolt hit.
pub const BOLT_DAMAGE: i32 = 25;

// --- Zombies ---

/// Zombie box side length (square).
pub const ZOMBIE_SIZE: f32 = 15.0;

/// Starting zombie hit points.
pub const ZOMBIE_MAX_HP: i32 = 100;

/// Pursuit step length in pixels per tick (unit speed, range-independent).
pub const ZOMBIE_STEP: f32 = 1.0;

/// Ticks between zombie spawns. The first spawn happens on the first tick.
pub const SPAWN_INTERVAL_TICKS: u32 = 90;

/// Horizontal offset outside the field at which edge spawns appear.
pub const SPAWN_EDGE_OFFSET: f32 = 15.0;

// --- Particle effects ---

/// Updates during which a particle system emits one particle each.
pub const PARTICLE_EMIT_BUDGET: u32 = 15;

/// Minimum initial particle life (ticks worth of decay).
pub const PARTICLE_LIFE_MIN: f32 = 3.0;

/// Maximum initial particle life (exclusive).
pub const PARTICLE_LIFE_MAX: f32 = 5.0;

/// Life lost per update.
pub const PARTICLE_LIFE_DECAY: f32 = 0.1;

/// Deviation below the base angle is sampled from this many discrete
/// hundredth-radian steps (inclusive), spanning [angle - 2.5, angle].
pub const PARTICLE_SPREAD_STEPS: u32 = 250;

/// Along-angle particle drift speed (pixels per update).
pub const PARTICLE_DRIFT_X: f32 = 2.0;

/// Cross-angle drift is sampled uniformly from this range at attach time.
pub const PARTICLE_DRIFT_Y_MAX: f32 = 1.0;
