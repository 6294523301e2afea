//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (edge flags sampled per tick)
//! - Asset loading (web only)

pub mod input;

#[cfg(target_arch = "wasm32")]
pub mod assets;

pub use input::{Direction, InputState};
