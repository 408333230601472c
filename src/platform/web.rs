//! wasm-bindgen facade for a browser renderer
//!
//! The page owns the canvas, the frame loop and the key/tap listeners. It
//! calls `activate` on every press, `tick` once per animation frame, and
//! draws whatever `snapshot_json` returns.

use wasm_bindgen::prelude::*;

use crate::config::{GameConfig, Preset};
use crate::session::{Activation, Session, SessionPhase};

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
}

impl WebGame {
    fn with_config(config: &GameConfig) -> Result<WebGame, JsValue> {
        let seed = js_sys::Date::now() as u64;
        let session =
            Session::new(config.clone(), seed).map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!("Flappish ready (seed {})", seed);
        Ok(WebGame { session })
    }
}

#[wasm_bindgen]
impl WebGame {
    /// Session with the standard tuning, seeded from the clock
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        Self::with_config(&GameConfig::default())
    }

    /// Session from a JSON config (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<WebGame, JsValue> {
        let config = GameConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::with_config(&config)
    }

    /// Session from a named preset ("standard" or "classic")
    pub fn with_preset(name: &str) -> Result<WebGame, JsValue> {
        let preset = Preset::from_str(name)
            .ok_or_else(|| JsValue::from_str(&format!("unknown preset {:?}", name)))?;
        Self::with_config(&GameConfig::from_preset(preset))
    }

    /// Start, restart or flap. Returns true if a new run began.
    pub fn activate(&mut self) -> bool {
        !matches!(self.session.activate(), Activation::Impulse)
    }

    /// Advance one frame. Returns false when no run is in progress afterwards.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        self.session.tick(dt_ms);
        self.session.phase() == SessionPhase::Running
    }

    pub fn score(&self) -> u32 {
        self.session.world().score.displayed()
    }

    pub fn best_score(&self) -> u32 {
        self.session.best_score()
    }

    /// Current frame as JSON
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.session.snapshot()).unwrap_or_default()
    }
}
