//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, per-frame speeds (no dt)
//! - Exactly one writer per frame (the tick)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use state::{Ball, GameState, Paddle, Side};
pub use tick::{TickInput, tick};
