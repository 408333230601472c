//! Per-frame simulation tick
//!
//! Advances a `World` by one frame. The order of the steps is fixed:
//! avatar, spawn timer, scroll + prune, scoring, collision, floor scroll.

use super::collision::{Collision, find_collision};
use super::kinematics::{Physics, step_avatar};
use super::state::World;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// An impulse was requested since the previous tick
    pub impulse: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// False once the run is over
    pub alive: bool,
    /// How much the displayed score rose this tick
    pub points: u32,
    /// A new pair was spawned this tick
    pub spawned: bool,
    /// Set on the tick that ended the run
    pub collision: Option<Collision>,
}

/// Advance the world by one frame of `dt_ms` milliseconds.
///
/// Ticking a world whose run is over changes nothing.
pub fn tick(world: &mut World, input: &TickInput, dt_ms: f32) -> TickOutcome {
    if !world.alive {
        return TickOutcome::default();
    }

    let mut outcome = TickOutcome {
        alive: true,
        ..Default::default()
    };
    let factor = world.config.step_mode.factor(dt_ms);
    world.time_ticks += 1;

    // 1. Avatar
    let physics = Physics {
        gravity: world.config.gravity,
        impulse: world.config.impulse,
        step_mode: world.config.step_mode,
    };
    world.avatar = step_avatar(world.avatar, dt_ms, &physics, input.impulse);

    // 2. Spawn timer (real milliseconds in every step mode)
    world.spawn_timer_ms += dt_ms;
    if world.spawn_timer_ms >= world.config.spawn_interval_ms {
        world.spawn_timer_ms = 0.0;
        match world.spawn_obstacle() {
            Some(id) => {
                outcome.spawned = true;
                log::debug!("Spawned obstacle pair {} at tick {}", id, world.time_ticks);
            }
            None => log::warn!("No candidate gap heights, skipping spawn"),
        }
    }

    // 3. Scroll, then drop pairs that left the screen
    let dx = -world.config.scroll_speed * factor;
    for pair in &mut world.obstacles {
        pair.translate_x(dx);
    }
    world.obstacles.retain(|pair| !pair.is_offscreen());

    // 4. Score each column once its right edge is past the avatar's left edge
    let avatar_left = world.avatar.pos.x;
    for pair in &mut world.obstacles {
        for column in pair.columns_mut() {
            if !column.scored && column.rect.right() < avatar_left {
                column.scored = true;
                if world.score.add_column() {
                    outcome.points += 1;
                }
            }
        }
    }
    if outcome.points > 0 {
        log::debug!("Score: {}", world.score.displayed());
    }

    // 5. Collision ends the run before the floor moves
    if let Some(hit) = find_collision(&world.avatar, world) {
        log::debug!("Collision with {:?} at tick {}", hit, world.time_ticks);
        world.alive = false;
        outcome.alive = false;
        outcome.collision = Some(hit);
        return outcome;
    }

    // 6. Cosmetic floor scroll, wrapped to (-width, 0]
    world.floor_offset -= world.config.floor_scroll_speed * factor;
    if world.floor_offset <= -world.config.width {
        world.floor_offset %= world.config.width;
    }

    outcome
}

/// By-value form of [`tick`]: returns the advanced world and whether it is alive
pub fn step(mut world: World, dt_ms: f32, impulse: bool) -> (World, bool) {
    let outcome = tick(&mut world, &TickInput { impulse }, dt_ms);
    (world, outcome.alive)
}
