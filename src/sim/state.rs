//! World state and core simulation types
//!
//! Everything a run needs lives in `World`, including its RNG, so a world can
//! be cloned, serialized and replayed deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::spawn::spawn_pair;
use crate::config::GameConfig;
use crate::consts::SCORE_PER_COLUMN;

/// The player-controlled avatar
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Avatar {
    /// Top-left corner; x never changes after spawn
    pub pos: Vec2,
    /// Hitbox size
    pub size: Vec2,
    /// Vertical velocity (pixels/tick, positive = down)
    pub velocity: f32,
}

impl Avatar {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.avatar_x, config.avatar_start_y),
            size: Vec2::new(config.avatar_width, config.avatar_height),
            velocity: 0.0,
        }
    }

    /// Hitbox as a rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// One rectangle of an obstacle pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub rect: Rect,
    /// Already counted toward the score
    pub scored: bool,
}

impl Column {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            scored: false,
        }
    }
}

/// A top/bottom column pair sharing x and separated by the gap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub id: u32,
    pub top: Column,
    pub bottom: Column,
}

impl ObstaclePair {
    pub fn columns(&self) -> [&Column; 2] {
        [&self.top, &self.bottom]
    }

    pub fn columns_mut(&mut self) -> [&mut Column; 2] {
        [&mut self.top, &mut self.bottom]
    }

    /// Scroll both columns horizontally
    pub fn translate_x(&mut self, dx: f32) {
        self.top.rect.translate_x(dx);
        self.bottom.rect.translate_x(dx);
    }

    /// Rightmost edge of the pair
    pub fn right(&self) -> f32 {
        self.top.rect.right().max(self.bottom.rect.right())
    }

    /// Fully scrolled past the left edge
    pub fn is_offscreen(&self) -> bool {
        self.right() <= 0.0
    }

    /// Vertical extent of the opening (top edge, bottom edge)
    pub fn gap(&self) -> (f32, f32) {
        (self.top.rect.bottom(), self.bottom.rect.top())
    }

    /// Both columns have been counted
    pub fn cleared(&self) -> bool {
        self.top.scored && self.bottom.scored
    }
}

/// Two-tier score: a fractional accumulator fed per column, and the
/// displayed integer that only moves when the floor of the accumulator grows
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Score {
    accumulated: f32,
    displayed: u32,
}

impl Score {
    /// Count one cleared column. Returns true if the displayed score went up.
    pub fn add_column(&mut self) -> bool {
        self.accumulated += SCORE_PER_COLUMN;
        let floored = self.accumulated.floor() as u32;
        if floored > self.displayed {
            self.displayed = floored;
            true
        } else {
            false
        }
    }

    /// Internal fractional score
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    /// Score shown to the player
    pub fn displayed(&self) -> u32 {
        self.displayed
    }
}

/// Complete state of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Parameters this world was built with
    pub config: GameConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub avatar: Avatar,
    /// Live obstacle pairs, oldest (leftmost) first
    pub obstacles: Vec<ObstaclePair>,
    /// Cosmetic floor scroll, in (-width, 0]
    pub floor_offset: f32,
    /// Milliseconds since the last spawn
    pub spawn_timer_ms: f32,
    pub score: Score,
    /// Ticks advanced so far
    pub time_ticks: u64,
    /// False once a collision ended the run
    pub alive: bool,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Fresh world: avatar at its spawn point, no obstacles, zero score and timers
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            config: config.clone(),
            seed,
            avatar: Avatar::new(config),
            obstacles: Vec::new(),
            floor_offset: 0.0,
            spawn_timer_ms: 0.0,
            score: Score::default(),
            time_ticks: 0,
            alive: true,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Append a pair at a random candidate height. Returns its ID, or `None`
    /// if the config has no candidate heights.
    pub fn spawn_obstacle(&mut self) -> Option<u32> {
        let id = self.next_id;
        let pair = spawn_pair(id, &self.config, &mut self.rng)?;
        self.next_id += 1;
        self.obstacles.push(pair);
        Some(id)
    }

    /// Number of pairs spawned so far
    pub fn spawned_count(&self) -> u32 {
        self.next_id - 1
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            avatar: self.avatar.rect(),
            obstacles: self
                .obstacles
                .iter()
                .flat_map(|pair| pair.columns().map(|c| c.rect))
                .collect(),
            score: self.score.displayed(),
            floor_offset: self.floor_offset,
            alive: self.alive,
            time_ticks: self.time_ticks,
        }
    }
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub avatar: Rect,
    /// Obstacle rectangles, top then bottom for each pair
    pub obstacles: Vec<Rect>,
    pub score: u32,
    pub floor_offset: f32,
    pub alive: bool,
    pub time_ticks: u64,
}
