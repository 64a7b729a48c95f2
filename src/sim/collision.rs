//! Collision predicates
//!
//! Pure geometry over integer pixels. The paddle and entity checks are
//! predictive: they look at where things land after the current velocity is
//! applied, so the response happens before anything visually penetrates.
//! The ball wall check reads the current extent; the scoring routine
//! reflects the ball in place rather than ahead of time.

use glam::IVec2;

use super::entity::{Ball, Paddle};
use super::state::GameArea;

/// Would the paddle leave `[left, right]` if it moved by its velocity?
///
/// Used to veto the move, not to clamp it: on collision the paddle simply
/// stays put this tick and keeps its velocity.
pub fn paddle_hits_wall(paddle: &Paddle, left: i32, right: i32) -> bool {
    let next_left = paddle.left() + paddle.velocity().x;
    let next_right = next_left + paddle.width();
    next_left < left || next_right > right
}

/// Does the ball's current horizontal extent exceed the side walls?
pub fn ball_hits_side_wall(ball: &Ball, area: &GameArea) -> bool {
    let x = ball.center().x;
    let r = ball.radius();
    x - r < area.left || x + r > area.right
}

/// Circle-vs-AABB test against the ball's predicted next center.
///
/// Clamps the predicted center onto the paddle's span per axis and compares
/// the squared distance to the closest point with radius squared.
pub fn paddle_ball_collision(paddle: &Paddle, ball: &Ball) -> bool {
    let next = ball.center() + ball.velocity();
    let closest = IVec2::new(
        next.x.clamp(paddle.left(), paddle.right()),
        next.y.clamp(paddle.top(), paddle.bottom()),
    );
    let delta = next - closest;
    delta.length_squared() < ball.radius() * ball.radius()
}
