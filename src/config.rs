//! Game configuration and tuning presets
//!
//! A `GameConfig` carries every number the simulation reads. Configs can be
//! loaded from JSON; any field left out falls back to the standard value.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Reference tuning: slow scroll, wide spacing
    #[default]
    Standard,
    /// Early tuning: fast scroll, dense obstacles, wider gap
    Classic,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Standard => "Standard",
            Preset::Classic => "Classic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" | "std" => Some(Preset::Standard),
            "classic" => Some(Preset::Classic),
            _ => None,
        }
    }
}

/// How per-tick increments relate to the elapsed frame time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum StepMode {
    /// Gravity, scroll and floor motion are applied once per tick, whatever dt is
    #[default]
    FixedStep,
    /// Increments are scaled by `dt / REFERENCE_TICK_MS`
    Scaled,
}

impl StepMode {
    /// Multiplier applied to every per-tick increment
    #[inline]
    pub fn factor(&self, dt_ms: f32) -> f32 {
        match self {
            StepMode::FixedStep => 1.0,
            StepMode::Scaled => dt_ms / REFERENCE_TICK_MS,
        }
    }
}

/// Full set of simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub width: f32,
    pub height: f32,
    pub floor_height: f32,
    pub floor_scroll_speed: f32,

    // === Avatar ===
    pub avatar_x: f32,
    /// Spawn y of the avatar's top edge
    pub avatar_start_y: f32,
    pub avatar_width: f32,
    pub avatar_height: f32,
    pub gravity: f32,
    pub impulse: f32,

    // === Obstacles ===
    pub scroll_speed: f32,
    pub spawn_interval_ms: f32,
    pub gap_size: f32,
    pub obstacle_width: f32,
    pub gap_heights: Vec<f32>,

    pub step_mode: StepMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            floor_height: FLOOR_HEIGHT,
            floor_scroll_speed: FLOOR_SCROLL_SPEED,

            avatar_x: AVATAR_X,
            avatar_start_y: PLAYFIELD_HEIGHT / 2.0,
            avatar_width: AVATAR_WIDTH,
            avatar_height: AVATAR_HEIGHT,
            gravity: GRAVITY,
            impulse: IMPULSE,

            scroll_speed: SCROLL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            gap_size: GAP_SIZE,
            obstacle_width: OBSTACLE_WIDTH,
            gap_heights: GAP_HEIGHTS.to_vec(),

            step_mode: StepMode::FixedStep,
        }
    }
}

impl GameConfig {
    /// Create a config from a preset
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Overwrite the preset-dependent fields
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Standard => {
                self.scroll_speed = SCROLL_SPEED;
                self.spawn_interval_ms = SPAWN_INTERVAL_MS;
                self.gap_size = GAP_SIZE;
            }
            Preset::Classic => {
                self.scroll_speed = 5.0;
                self.spawn_interval_ms = 600.0;
                self.gap_size = 300.0;
            }
        }
    }

    /// y coordinate of the floor band's top edge
    #[inline]
    pub fn floor_line(&self) -> f32 {
        self.height - self.floor_height
    }

    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs that would produce degenerate obstacles or a
    /// nonsensical playfield
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("floor_height", self.floor_height),
            ("floor_scroll_speed", self.floor_scroll_speed),
            ("avatar_x", self.avatar_x),
            ("avatar_start_y", self.avatar_start_y),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("gravity", self.gravity),
            ("impulse", self.impulse),
            ("scroll_speed", self.scroll_speed),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("gap_size", self.gap_size),
            ("obstacle_width", self.obstacle_width),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::invalid(*field, "must be finite"));
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("avatar_width", self.avatar_width),
            ("avatar_height", self.avatar_height),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("gap_size", self.gap_size),
            ("obstacle_width", self.obstacle_width),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::invalid(*field, "must be positive"));
        }

        if self.floor_height < 0.0 || self.floor_height >= self.height {
            return Err(ConfigError::invalid(
                "floor_height",
                "must lie within the playfield height",
            ));
        }
        if self.impulse >= 0.0 {
            return Err(ConfigError::invalid("impulse", "must be negative (upward)"));
        }
        if self.scroll_speed < 0.0 {
            return Err(ConfigError::invalid("scroll_speed", "must not be negative"));
        }

        if self.gap_heights.is_empty() {
            return Err(ConfigError::NoCandidates);
        }
        let limit = self.floor_line();
        for &height in &self.gap_heights {
            if !height.is_finite() {
                return Err(ConfigError::invalid("gap_heights", "must be finite"));
            }
            if height <= self.gap_size {
                return Err(ConfigError::DegenerateGap {
                    height,
                    gap: self.gap_size,
                });
            }
            if height >= limit {
                return Err(ConfigError::DegenerateBottom { height, limit });
            }
        }

        Ok(())
    }
}

/// Reasons a config is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed or written
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// A scalar field is out of range
    #[error("{field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    /// Candidate height leaves no room for the top obstacle
    #[error("gap height {height} must exceed the gap size {gap}")]
    DegenerateGap { height: f32, gap: f32 },
    /// Candidate height leaves no room for the bottom obstacle
    #[error("gap height {height} must be above the floor line {limit}")]
    DegenerateBottom { height: f32, limit: f32 },
    /// No candidate gap heights
    #[error("gap_heights must not be empty")]
    NoCandidates,
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        ConfigError::Invalid { field, reason }
    }
}
