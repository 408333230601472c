//! Session state machine
//!
//! Routes the single "activate" input: it starts a run from the title
//! screen, restarts after a game over, and flaps during play. Flaps are
//! latched and handed to the next tick exactly once.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, GameConfig};
use crate::sim::{Snapshot, TickInput, TickOutcome, World, tick};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title screen, waiting for the first activate
    AwaitingStart,
    /// A run is in progress
    Running,
    /// The last run ended in a collision
    Ended,
}

/// What an activate did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Started,
    Restarted,
    /// Impulse queued for the next tick
    Impulse,
}

/// Owns the current `World` and decides when it ticks
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    base_seed: u64,
    phase: SessionPhase,
    world: World,
    pending_impulse: bool,
    runs: u32,
    best_score: u32,
}

impl Session {
    /// Validate `config` and wait on the title screen
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let world = World::new(&config, seed);
        Ok(Self {
            config,
            base_seed: seed,
            phase: SessionPhase::AwaitingStart,
            world,
            pending_impulse: false,
            runs: 0,
            best_score: 0,
        })
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Runs started so far
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Best displayed score over finished runs (in memory only)
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// An impulse is latched for the next tick
    pub fn impulse_pending(&self) -> bool {
        self.pending_impulse
    }

    /// Handle the activate input
    pub fn activate(&mut self) -> Activation {
        match self.phase {
            SessionPhase::AwaitingStart => {
                self.start_run();
                Activation::Started
            }
            SessionPhase::Ended => {
                self.start_run();
                Activation::Restarted
            }
            SessionPhase::Running => {
                self.pending_impulse = true;
                Activation::Impulse
            }
        }
    }

    /// Advance the running world by one frame.
    ///
    /// Returns `None` when no run is in progress.
    pub fn tick(&mut self, dt_ms: f32) -> Option<TickOutcome> {
        if self.phase != SessionPhase::Running {
            return None;
        }

        let input = TickInput {
            impulse: std::mem::take(&mut self.pending_impulse),
        };
        let outcome = tick(&mut self.world, &input, dt_ms);

        if !outcome.alive {
            let score = self.world.score.displayed();
            self.best_score = self.best_score.max(score);
            self.phase = SessionPhase::Ended;
            log::info!(
                "Run {} ended after {} ticks with score {} ({:?})",
                self.runs,
                self.world.time_ticks,
                score,
                outcome.collision
            );
        }

        Some(outcome)
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            best_score: self.best_score,
            runs: self.runs,
            world: self.world.snapshot(),
        }
    }

    fn start_run(&mut self) {
        self.runs += 1;
        let seed = self.run_seed();
        self.world = World::new(&self.config, seed);
        self.pending_impulse = false;
        self.phase = SessionPhase::Running;
        log::info!("Started run {} with seed: {}", self.runs, seed);
    }

    /// First run uses the base seed; later runs step away from it
    fn run_seed(&self) -> u64 {
        let offset = u64::from(self.runs.saturating_sub(1));
        self.base_seed
            .wrapping_add(offset.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Session-level frame view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub best_score: u32,
    pub runs: u32,
    #[serde(flatten)]
    pub world: Snapshot,
}
