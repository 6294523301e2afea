//! Canvas 2D rendering module
//!
//! The simulation hands over a snapshot; nothing here feeds back into gameplay.

pub mod palette;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
