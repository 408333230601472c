//! Flappish entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively there is no window: the binary plays a few demo runs headless
//! with the autopilot and logs how they went.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result, anyhow};

    use flappish::sim::Autopilot;
    use flappish::{GameConfig, Preset, Session, SessionPhase};

    /// Simulated frame interval (~60 Hz)
    const FRAME_MS: f32 = 16.0;
    /// Upper bound per run so a perfect pilot still terminates
    const MAX_TICKS_PER_RUN: u64 = 60 * 60 * 5;
    const DEFAULT_RUNS: u32 = 3;

    /// A config file from `FLAPPISH_CONFIG` wins over `FLAPPISH_PRESET`
    fn load_config() -> Result<GameConfig> {
        let preset = std::env::var("FLAPPISH_PRESET").ok();
        match std::env::var("FLAPPISH_CONFIG") {
            Ok(path) => {
                if let Some(name) = preset {
                    log::warn!("FLAPPISH_CONFIG is set, ignoring FLAPPISH_PRESET={}", name);
                }
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config {}", path))?;
                let config = GameConfig::from_json(&json)
                    .with_context(|| format!("parsing config {}", path))?;
                log::info!("Loaded config from {}", path);
                Ok(config)
            }
            Err(_) => preset_config(preset.as_deref()),
        }
    }

    fn preset_config(name: Option<&str>) -> Result<GameConfig> {
        let preset = match name {
            Some(name) => Preset::from_str(name)
                .ok_or_else(|| anyhow!("unknown preset {:?}", name))
                .context("FLAPPISH_PRESET must be \"standard\" or \"classic\"")?,
            None => Preset::default(),
        };
        log::info!("Using {} preset", preset.as_str());
        Ok(GameConfig::from_preset(preset))
    }

    fn run_count() -> Result<u32> {
        match std::env::var("FLAPPISH_RUNS") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("FLAPPISH_RUNS must be a number, got {:?}", value)),
            Err(_) => Ok(DEFAULT_RUNS),
        }
    }

    pub fn run() -> Result<()> {
        let config = load_config()?;
        let runs = run_count()?;
        let seed: u64 = rand::random();

        let pilot = Autopilot::default();
        let mut best = 0;

        for run in 0..runs {
            // Fresh session per run so a capped run does not block the next one
            let mut session = Session::new(config.clone(), seed.wrapping_add(u64::from(run)))
                .context("invalid config")?;
            session.activate();
            while session.phase() == SessionPhase::Running {
                if pilot.decide(session.world()) {
                    session.activate();
                }
                session.tick(FRAME_MS);
                if session.world().time_ticks >= MAX_TICKS_PER_RUN {
                    log::info!(
                        "Run {} still alive after {} ticks, stopping",
                        run + 1,
                        MAX_TICKS_PER_RUN
                    );
                    break;
                }
            }
            let world = session.world();
            println!(
                "run {}: score {} in {} ticks",
                run + 1,
                world.score.displayed(),
                world.time_ticks
            );
            best = best.max(world.score.displayed());
        }

        println!("best: {}", best);
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Flappish (native headless demo) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
