//! Platform abstraction layer
//!
//! The browser build exposes the session to a JavaScript renderer through
//! `web::WebGame`. Native builds drive the session directly (see `main.rs`).

#[cfg(target_arch = "wasm32")]
pub mod web;
