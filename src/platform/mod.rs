//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input aggregation (keyboard, on-screen buttons, pointer)
//! - Wasm bindings the page drives the game through

pub mod input;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use input::{CanvasRect, Control, InputState, show_touch_controls};
