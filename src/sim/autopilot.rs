//! Demo mode controller
//!
//! Plays the game by keeping the avatar's bottom edge just above the lower
//! edge of the next opening: it requests an impulse whenever the avatar is
//! falling and would otherwise drop below that line on the next tick.

use super::state::World;

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Clearance kept above the lower edge of the opening
    pub margin: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { margin: 20.0 }
    }
}

impl Autopilot {
    /// y the avatar's bottom edge should stay above
    pub fn target_line(&self, world: &World) -> f32 {
        let avatar_left = world.avatar.pos.x;
        world
            .obstacles
            .iter()
            .find(|pair| pair.right() >= avatar_left)
            .map(|pair| pair.gap().1)
            // Nothing ahead: hover in the lower middle of the playfield
            .unwrap_or(world.config.floor_line() - world.config.gap_size / 2.0)
            - self.margin
    }

    /// Whether to request an impulse before the next tick
    pub fn decide(&self, world: &World) -> bool {
        if !world.alive {
            return false;
        }
        let avatar = &world.avatar;
        if avatar.velocity < 0.0 {
            return false;
        }
        let next_bottom = avatar.rect().bottom() + avatar.velocity + world.config.gravity;
        next_bottom >= self.target_line(world)
    }
}
