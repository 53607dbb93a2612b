//! Per-frame state transition
//!
//! One `tick` per animation frame. All speeds are per-frame displacements,
//! never scaled by a delta time.

use super::collision;
use super::state::{GameState, Side};

/// Input commands for a single tick
///
/// Event handlers write this; the tick consumes it. Routing pointer events
/// through here (instead of mutating the paddle from the handler) keeps the
/// state machine single-writer: handler and frame never run concurrently,
/// only interleaved at event-loop granularity.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Latest pointer position, in field-local vertical coordinates
    pub pointer_y: Option<f32>,
}

/// Advance the game by one frame.
///
/// Fixed order: pointer command, scripted opponent
/// move, then the ball step. Returns the side that scored this frame, if
/// any, so the caller can surface it.
pub fn tick(state: &mut GameState, input: &TickInput) -> Option<Side> {
    state.time_ticks += 1;

    if let Some(pointer_y) = input.pointer_y {
        state.set_player_position(pointer_y);
    }

    state.opponent_move();
    ball_step(state)
}

/// The five-stage ball step. Stage order is load-bearing: each test reads
/// the pre-move position, and integration runs unconditionally last, even
/// on a frame that scored.
fn ball_step(state: &mut GameState) -> Option<Side> {
    // Wall bounce (pre-move y; fires the frame after a crossing)
    if collision::past_wall(state.ball.pos.y, state.field_height) {
        state.ball.speed.y *= -1.0;
    }

    // Paddle contact bands, opponent side tested first
    if collision::in_opponent_band(state.ball.pos.x, state.field_width, state.ball.speed.x) {
        state.collide(Side::Opponent);
    } else if collision::in_player_band(state.ball.pos.x, state.ball.speed.x) {
        state.collide(Side::Player);
    }

    // Scoring: crossing a side's edge awards the far side
    let mut scored = None;
    if state.ball.pos.x >= state.field_width {
        state.score(Side::Player);
        scored = Some(Side::Player);
    } else if state.ball.pos.x <= 0.0 {
        state.score(Side::Opponent);
        scored = Some(Side::Opponent);
    }

    // Integrate
    state.ball.pos += state.ball.speed;

    scored
}
