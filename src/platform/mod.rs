//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Frame scheduling (requestAnimationFrame on web)
//! - Time

pub mod time;

#[cfg(target_arch = "wasm32")]
pub mod frame;

#[cfg(target_arch = "wasm32")]
pub use frame::FrameLoop;
