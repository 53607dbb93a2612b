//! Collision predicates and deflection math
//!
//! Pure functions over the ball's pre-move position, shared by the tick
//! loop and the state machine. Two quirks are kept deliberately and pinned
//! by tests:
//!
//! - The wall test looks at the pre-move y, so a bounce fires one frame
//!   after the ball visually crosses the edge.
//! - The player-side band test adds a negative `speed.x`, turning it into a
//!   backward-looking band.

use crate::consts::*;

/// True if the ball is past the top or bottom field edge.
///
/// Strict comparisons, evaluated before the ball moves.
#[inline]
pub fn past_wall(ball_y: f32, field_height: f32) -> bool {
    ball_y > field_height || ball_y < 0.0
}

/// True if the ball is in the contact band in front of the opponent paddle:
/// past the paddle face but by no more than one frame's travel.
#[inline]
pub fn in_opponent_band(ball_x: f32, field_width: f32, speed_x: f32) -> bool {
    let face = field_width - PADDLE_COLLISION_X;
    ball_x > face && ball_x <= face + speed_x
}

/// Player-side counterpart of [`in_opponent_band`].
///
/// With the ball approaching (negative `speed.x`) the lower bound sits
/// behind the paddle face, so this reads as a backward-looking band.
#[inline]
pub fn in_player_band(ball_x: f32, speed_x: f32) -> bool {
    ball_x < PADDLE_COLLISION_X && ball_x >= PADDLE_COLLISION_X + speed_x
}

/// True if the ball's y falls within the paddle's vertical extent
/// (both edges inclusive)
#[inline]
pub fn paddle_covers(paddle_y: f32, ball_y: f32) -> bool {
    ball_y >= paddle_y && ball_y <= paddle_y + PLAYER_HEIGHT
}

/// Vertical speed imparted by a paddle hit.
///
/// Linear in the signed offset of the contact point from the paddle
/// center: 0 at dead center, ±10 at the edges.
#[inline]
pub fn deflection_speed(ball_y: f32, paddle_y: f32) -> f32 {
    let impact = ball_y - paddle_y - PLAYER_HEIGHT / 2.0;
    let ratio = 100.0 / (PLAYER_HEIGHT / 2.0);
    impact * ratio / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn wall_test_is_strict() {
        assert!(!past_wall(0.0, 600.0));
        assert!(!past_wall(600.0, 600.0));
        assert!(past_wall(600.1, 600.0));
        assert!(past_wall(-0.1, 600.0));
    }

    #[test]
    fn opponent_band_spans_one_frame_of_travel() {
        // Field width 800, paddle face at 760, speed 4: band is (760, 764]
        assert!(!in_opponent_band(760.0, 800.0, 4.0));
        assert!(in_opponent_band(761.0, 800.0, 4.0));
        assert!(in_opponent_band(764.0, 800.0, 4.0));
        assert!(!in_opponent_band(764.1, 800.0, 4.0));
    }

    #[test]
    fn player_band_looks_backward_when_approaching() {
        // Face at 40, speed -4: band is [36, 40)
        assert!(in_player_band(36.0, -4.0));
        assert!(in_player_band(39.9, -4.0));
        assert!(!in_player_band(40.0, -4.0));
        assert!(!in_player_band(35.9, -4.0));
    }

    #[test]
    fn player_band_is_empty_for_outgoing_ball() {
        // Positive speed pushes the lower bound past the face; as written,
        // no x satisfies the test
        assert!(!in_player_band(39.0, 4.0));
        assert!(!in_player_band(42.0, 4.0));
    }

    #[test]
    fn paddle_cover_includes_both_edges() {
        assert!(paddle_covers(250.0, 250.0));
        assert!(paddle_covers(250.0, 350.0));
        assert!(!paddle_covers(250.0, 249.9));
        assert!(!paddle_covers(250.0, 350.1));
    }

    proptest! {
        #[test]
        fn deflection_is_linear_and_bounded_on_the_paddle(
            offset in 0.0_f32..=crate::consts::PLAYER_HEIGHT,
            paddle_y in 0.0_f32..500.0,
        ) {
            let speed = deflection_speed(paddle_y + offset, paddle_y);
            prop_assert!(speed >= -10.0 - 1e-3);
            prop_assert!(speed <= 10.0 + 1e-3);
            // Mirror symmetry around the paddle center
            let mirrored = deflection_speed(
                paddle_y + (crate::consts::PLAYER_HEIGHT - offset),
                paddle_y,
            );
            prop_assert!((speed + mirrored).abs() < 1e-3);
        }
    }
}
