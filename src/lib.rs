//! Canvas Pong - classic two-paddle Pong on an HTML 2D canvas
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball kinematics, collisions, scoring)
//! - `renderer`: Canvas-2D painter (read-only over the sim state)
//! - `platform`: Frame scheduling and time
//! - `settings`: Visual preferences

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Fixed at compile time; the sim has no runtime physics tuning.
pub mod consts {
    /// Paddle dimensions (pixels)
    pub const PLAYER_HEIGHT: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 5.0;

    /// Ball serve speed after construction and after every scoring reset
    pub const BALL_DEFAULT_SPEED_X: f32 = 4.0;
    pub const BALL_DEFAULT_SPEED_Y: f32 = 2.0;
    pub const BALL_RADIUS: f32 = 5.0;

    /// Horizontal inset of both paddles from their field edge
    pub const Y_MARGIN: f32 = 30.0;

    /// Distance from a field edge at which the ball can contact a paddle face
    pub const PADDLE_COLLISION_X: f32 = Y_MARGIN + PLAYER_WIDTH + BALL_RADIUS;

    /// Horizontal speed multiplier on every paddle hit (also flips direction)
    pub const PADDLE_BOOST: f32 = -1.1;

    /// Fraction of the ball's vertical speed the scripted opponent follows
    pub const OPPONENT_TRACKING: f32 = 0.85;
}
