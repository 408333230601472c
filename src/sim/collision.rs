//! Collision detection
//!
//! The run ends when the avatar touches the ceiling, reaches the floor band,
//! or overlaps any obstacle column.

use serde::{Deserialize, Serialize};

use super::state::{Avatar, World};

/// What the avatar hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Ceiling,
    Floor,
    Obstacle { id: u32 },
}

/// Check the avatar against the playfield bounds
pub fn bounds_collision(avatar: &Avatar, floor_line: f32) -> Option<Collision> {
    let rect = avatar.rect();
    if rect.top() <= 0.0 {
        Some(Collision::Ceiling)
    } else if rect.bottom() >= floor_line {
        Some(Collision::Floor)
    } else {
        None
    }
}

/// First collision found, bounds before obstacles
pub fn find_collision(avatar: &Avatar, world: &World) -> Option<Collision> {
    if let Some(hit) = bounds_collision(avatar, world.config.floor_line()) {
        return Some(hit);
    }

    let hitbox = avatar.rect();
    world
        .obstacles
        .iter()
        .find(|pair| pair.columns().iter().any(|c| hitbox.overlaps(&c.rect)))
        .map(|pair| Collision::Obstacle { id: pair.id })
}

/// True if the avatar touches a bound or overlaps any obstacle
#[inline]
pub fn collides(avatar: &Avatar, world: &World) -> bool {
    find_collision(avatar, world).is_some()
}
