//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One `tick` call per frame, driven from outside
//! - Seeded RNG only (owned by the `World`)
//! - Stable iteration order (obstacles by spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geometry;
pub mod kinematics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{Collision, collides, find_collision};
pub use geometry::Rect;
pub use kinematics::{Physics, step_avatar};
pub use spawn::{pair_at_height, spawn_pair};
pub use state::{Avatar, Column, ObstaclePair, Score, Snapshot, World};
pub use tick::{TickInput, TickOutcome, step, tick};
