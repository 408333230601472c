//! Flappish - a side-scrolling gap-threading arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, scoring, collisions)
//! - `session`: Start / play / game-over state machine around a `World`
//! - `config`: Tunable constants, presets and validation
//! - `platform`: Browser facade for an external renderer

pub mod config;
pub mod platform;
pub mod session;
pub mod sim;

pub use config::{ConfigError, GameConfig, Preset, StepMode};
pub use session::{Activation, Session, SessionPhase};
pub use sim::{Snapshot, TickInput, TickOutcome, World, step, tick};

/// Reference game constants (pixels, pixels/tick, milliseconds)
pub mod consts {
    /// Nominal frame duration the per-tick constants are tuned for (~60 Hz)
    pub const REFERENCE_TICK_MS: f32 = 1000.0 / 60.0;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 1100.0;
    pub const PLAYFIELD_HEIGHT: f32 = 706.0;
    /// Height of the floor band at the bottom of the playfield
    pub const FLOOR_HEIGHT: f32 = 100.0;
    /// Cosmetic floor scroll per tick
    pub const FLOOR_SCROLL_SPEED: f32 = 1.0;

    /// Avatar hitbox and spawn point
    pub const AVATAR_X: f32 = 100.0;
    pub const AVATAR_WIDTH: f32 = 50.0;
    pub const AVATAR_HEIGHT: f32 = 70.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.4;
    /// Velocity set by an impulse (negative = upward)
    pub const IMPULSE: f32 = -10.0;

    /// Obstacles
    pub const SCROLL_SPEED: f32 = 3.0;
    pub const SPAWN_INTERVAL_MS: f32 = 1800.0;
    pub const GAP_SIZE: f32 = 250.0;
    pub const OBSTACLE_WIDTH: f32 = 80.0;
    /// Candidate y coordinates of the bottom obstacle's top edge
    pub const GAP_HEIGHTS: [f32; 3] = [400.0, 450.0, 500.0];

    /// Score contributed by each cleared rectangle (a pair is worth one point)
    pub const SCORE_PER_COLUMN: f32 = 0.5;
}
