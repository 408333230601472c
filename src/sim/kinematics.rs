//! Avatar vertical motion under gravity and impulses

use super::state::Avatar;
use crate::config::StepMode;

/// Physics parameters for one avatar step
#[derive(Debug, Clone, Copy)]
pub struct Physics {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Velocity an impulse sets (negative = up)
    pub impulse: f32,
    pub step_mode: StepMode,
}

/// Advance the avatar by one tick.
///
/// Without an impulse, gravity is added to the velocity. An impulse replaces
/// the velocity with the impulse constant instead, so repeated impulses never
/// stack. The position then moves by the new velocity.
pub fn step_avatar(avatar: Avatar, dt_ms: f32, physics: &Physics, impulse: bool) -> Avatar {
    let factor = physics.step_mode.factor(dt_ms);
    let velocity = if impulse {
        physics.impulse
    } else {
        avatar.velocity + physics.gravity * factor
    };

    let mut next = avatar;
    next.velocity = velocity;
    next.pos.y += velocity * factor;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn physics(step_mode: StepMode) -> Physics {
        Physics {
            gravity: 0.4,
            impulse: -10.0,
            step_mode,
        }
    }

    #[test]
    fn test_free_fall_five_ticks() {
        let mut avatar = Avatar::new(&GameConfig::default());
        let p = physics(StepMode::FixedStep);
        for _ in 0..5 {
            avatar = step_avatar(avatar, 16.0, &p, false);
        }
        assert!((avatar.velocity - 2.0).abs() < 1e-4);
        assert!((avatar.pos.y - 359.0).abs() < 1e-3);
        assert_eq!(avatar.pos.x, 100.0);
    }

    #[test]
    fn test_impulse_overwrites_velocity() {
        let p = physics(StepMode::FixedStep);
        let mut avatar = Avatar::new(&GameConfig::default());
        avatar.velocity = 7.3;
        let a = step_avatar(avatar, 16.0, &p, true);
        assert_eq!(a.velocity, -10.0);
        assert!((a.pos.y - 343.0).abs() < 1e-4);

        // A second impulse does not add up
        let b = step_avatar(a, 16.0, &p, true);
        assert_eq!(b.velocity, -10.0);
    }

    #[test]
    fn test_fixed_step_ignores_dt() {
        let p = physics(StepMode::FixedStep);
        let avatar = Avatar::new(&GameConfig::default());
        let slow = step_avatar(avatar, 50.0, &p, false);
        let fast = step_avatar(avatar, 5.0, &p, false);
        assert_eq!(slow, fast);
    }

    #[test]
    fn test_scaled_step_uses_dt() {
        let p = physics(StepMode::Scaled);
        let avatar = Avatar::new(&GameConfig::default());
        let one = step_avatar(avatar, crate::consts::REFERENCE_TICK_MS, &p, false);
        assert!((one.velocity - 0.4).abs() < 1e-4);
        let two = step_avatar(avatar, crate::consts::REFERENCE_TICK_MS * 2.0, &p, false);
        assert!((two.velocity - 0.8).abs() < 1e-4);
        assert!((two.pos.y - (353.0 + 1.6)).abs() < 1e-3);
    }
}
