//! Game state and core simulation types
//!
//! One mutable state machine owns both paddles, the ball, and the field
//! dimensions. All operations are total: there are no error paths anywhere
//! in the sim.

use glam::Vec2;

use crate::consts::*;

/// Which side of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Left side, pointer-controlled
    Player,
    /// Right side, scripted
    Opponent,
}

/// A paddle: top edge of a PLAYER_WIDTH x PLAYER_HEIGHT rectangle, plus
/// the accumulated score for its side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub y: f32,
    pub score: u32,
}

impl Paddle {
    /// New paddle vertically centered on the field
    pub fn new(field_height: f32) -> Self {
        Self {
            y: field_height / 2.0 - PLAYER_HEIGHT / 2.0,
            score: 0,
        }
    }
}

/// The ball. Position is unconstrained; leaving the field horizontally is
/// the scoring condition, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-frame displacement. Persists across frames; mutated only by
    /// paddle hits and scoring resets.
    pub speed: Vec2,
}

impl Ball {
    /// New ball at field center, serving toward the opponent side
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            pos: Vec2::new(field_width / 2.0, field_height / 2.0),
            speed: Vec2::new(BALL_DEFAULT_SPEED_X, BALL_DEFAULT_SPEED_Y),
        }
    }
}

/// Complete game state
///
/// Field dimensions are read from the canvas once at construction and
/// assumed constant for the life of the game.
#[derive(Debug, Clone)]
pub struct GameState {
    pub field_width: f32,
    pub field_height: f32,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    /// Frame counter (diagnostics only, no gameplay effect)
    pub time_ticks: u64,
}

impl GameState {
    pub fn new(field_width: f32, field_height: f32) -> Self {
        Self {
            field_width,
            field_height,
            player: Paddle::new(field_height),
            opponent: Paddle::new(field_height),
            ball: Ball::new(field_width, field_height),
            time_ticks: 0,
        }
    }

    fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Move the player paddle to follow a pointer position (field-local y).
    ///
    /// Clamps so the whole paddle stays on the field; this is the only
    /// place the player paddle's bounds invariant is enforced.
    pub fn set_player_position(&mut self, pointer_y: f32) {
        if pointer_y < PLAYER_HEIGHT / 2.0 {
            self.player.y = 0.0;
        } else if pointer_y > self.field_height - PLAYER_HEIGHT / 2.0 {
            self.player.y = self.field_height - PLAYER_HEIGHT;
        } else {
            self.player.y = pointer_y - PLAYER_HEIGHT / 2.0;
        }
    }

    /// Scripted opponent control: follow the ball's vertical speed at a
    /// fixed fraction. Deliberately unclamped and unaware of the ball's
    /// horizontal position.
    pub fn opponent_move(&mut self) {
        self.opponent.y += self.ball.speed.y * OPPONENT_TRACKING;
    }

    /// Resolve a ball-paddle contact on the given side.
    ///
    /// A miss (ball outside the paddle's vertical extent) is a no-op; the
    /// ball flies on toward the scoring edge. A hit reverses and amplifies
    /// the horizontal speed, then derives a fresh vertical speed from the
    /// contact offset. The amplification is unbounded over a long rally;
    /// deliberate, and pinned by tests.
    pub fn collide(&mut self, side: Side) {
        let paddle_y = self.paddle_mut(side).y;
        if super::collision::paddle_covers(paddle_y, self.ball.pos.y) {
            self.ball.speed.x *= PADDLE_BOOST;
            self.change_direction(paddle_y);
        }
    }

    /// Set the ball's vertical speed from where it struck the paddle.
    ///
    /// Replaces the previous vertical speed entirely; a dead-center hit
    /// returns the ball flat.
    pub fn change_direction(&mut self, paddle_y: f32) {
        self.ball.speed.y = super::collision::deflection_speed(self.ball.pos.y, paddle_y);
    }

    /// Award a point and reset for the next serve.
    ///
    /// Recenters the ball and both paddles and restores the serve speed on
    /// x (always toward the opponent). The vertical speed carries over from
    /// before the point.
    pub fn score(&mut self, side: Side) {
        self.ball.pos = Vec2::new(self.field_width / 2.0, self.field_height / 2.0);
        self.player.y = self.field_height / 2.0 - PLAYER_HEIGHT / 2.0;
        self.opponent.y = self.field_height / 2.0 - PLAYER_HEIGHT / 2.0;

        self.ball.speed.x = BALL_DEFAULT_SPEED_X;

        let paddle = self.paddle_mut(side);
        paddle.score += 1;
        log::debug!(
            "point for {:?}: {} - {}",
            side,
            self.player.score,
            self.opponent.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const W: f32 = 800.0;
    const H: f32 = 600.0;

    #[test]
    fn new_state_is_centered() {
        let state = GameState::new(W, H);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.speed, Vec2::new(4.0, 2.0));
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.opponent.y, 250.0);
        assert_eq!(state.player.score, 0);
        assert_eq!(state.opponent.score, 0);
    }

    #[test]
    fn pointer_clamps_at_edges() {
        let mut state = GameState::new(W, H);

        state.set_player_position(-500.0);
        assert_eq!(state.player.y, 0.0);

        state.set_player_position(10_000.0);
        assert_eq!(state.player.y, H - PLAYER_HEIGHT);

        // In-range pointer centers the paddle on it
        state.set_player_position(300.0);
        assert_eq!(state.player.y, 250.0);
    }

    proptest! {
        #[test]
        fn pointer_clamp_law(pointer_y in -1.0e6_f32..1.0e6) {
            let mut state = GameState::new(W, H);
            state.set_player_position(pointer_y);
            prop_assert!(state.player.y >= 0.0);
            prop_assert!(state.player.y <= H - PLAYER_HEIGHT);
        }
    }

    #[test]
    fn hit_amplifies_speed() {
        let mut state = GameState::new(W, H);
        state.player.y = 250.0;
        state.ball.pos.y = 300.0;
        state.ball.speed.x = -4.0;

        state.collide(Side::Player);
        assert!((state.ball.speed.x - 4.4).abs() < 1e-4);

        // Every hit compounds; nothing caps the growth
        state.ball.speed.x = -4.84;
        state.collide(Side::Player);
        assert!((state.ball.speed.x - 5.324).abs() < 1e-3);
    }

    #[test]
    fn miss_is_a_no_op() {
        let mut state = GameState::new(W, H);
        state.opponent.y = 250.0;
        state.ball.pos.y = 400.0; // below the paddle's bottom edge at 350
        let speed_before = state.ball.speed;

        state.collide(Side::Opponent);
        assert_eq!(state.ball.speed, speed_before);
    }

    #[test]
    fn edge_hits_deflect_full_tilt() {
        let mut state = GameState::new(W, H);
        state.player.y = 250.0;

        state.ball.pos.y = 250.0; // exact top edge
        state.change_direction(state.player.y);
        assert!((state.ball.speed.y - (-10.0)).abs() < 1e-4);

        state.ball.pos.y = 350.0; // exact bottom edge
        state.change_direction(state.player.y);
        assert!((state.ball.speed.y - 10.0).abs() < 1e-4);

        state.ball.pos.y = 300.0; // dead center
        state.change_direction(state.player.y);
        assert_eq!(state.ball.speed.y, 0.0);
    }

    #[test]
    fn score_resets_positions_but_not_scores() {
        let mut state = GameState::new(W, H);
        state.ball.pos = Vec2::new(805.0, 123.0);
        state.ball.speed = Vec2::new(-7.3, 6.5);
        state.player.y = 10.0;
        state.opponent.y = 480.0;
        state.opponent.score = 2;

        state.score(Side::Player);

        assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.speed.x, BALL_DEFAULT_SPEED_X);
        // Vertical speed carries over from before the point
        assert_eq!(state.ball.speed.y, 6.5);
        assert_eq!(state.player.y, 250.0);
        assert_eq!(state.opponent.y, 250.0);
        assert_eq!(state.player.score, 1);
        assert_eq!(state.opponent.score, 2);
    }

    #[test]
    fn opponent_tracks_ball_speed() {
        let mut state = GameState::new(W, H);
        state.ball.speed.y = 10.0;
        let y_before = state.opponent.y;

        state.opponent_move();
        assert!((state.opponent.y - (y_before + 8.5)).abs() < 1e-4);
    }

    #[test]
    fn opponent_is_not_clamped() {
        let mut state = GameState::new(W, H);
        state.ball.speed.y = -10.0;
        state.opponent.y = 2.0;

        state.opponent_move();
        assert!(state.opponent.y < 0.0);
    }
}
