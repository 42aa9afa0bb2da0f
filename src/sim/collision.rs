//! Collision detection and response
//!
//! Everything is axis-aligned: the ball is treated as its bounding square,
//! and responses are single-axis velocity flips.

use glam::Vec2;

use super::rect::Rect;
use super::state::{Ball, Brick, Paddle};

/// Which walls the ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub left: bool,
    pub right: bool,
    pub ceiling: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.left || self.right || self.ceiling
    }
}

/// Reflect the ball off the side walls and ceiling.
///
/// Axes are checked independently so a corner hit flips both components.
/// The reflected component always points back into the play field, so a ball
/// that is still past a wall on the next tick does not flip back out.
pub fn reflect_off_walls(ball: &mut Ball, window_width: f32) -> WallHits {
    let r = ball.rect();
    let mut hits = WallHits::default();

    if r.left <= 0.0 {
        ball.vel.x = ball.vel.x.abs();
        hits.left = true;
    } else if r.right >= window_width {
        ball.vel.x = -ball.vel.x.abs();
        hits.right = true;
    }

    if r.top <= 0.0 {
        ball.vel.y = ball.vel.y.abs();
        hits.ceiling = true;
    }

    hits
}

/// Ball's bottom edge has reached the floor
pub fn hits_floor(ball: &Ball, window_height: f32) -> bool {
    ball.rect().bottom >= window_height
}

/// Downward-moving ball whose bottom edge lies within the paddle's vertical
/// span while the horizontal extents overlap
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    if ball.vel.y <= 0.0 {
        return false;
    }
    let b = ball.rect();
    let p = paddle.rect();
    b.bottom >= p.top && b.bottom <= p.bottom && b.overlaps_x(&p)
}

/// Horizontal kick from where the ball struck the paddle: -1 at the left
/// edge, +1 at the right edge
pub fn deflection(ball_center_x: f32, paddle: &Paddle) -> f32 {
    (ball_center_x - paddle.center_x()) / (paddle.width / 2.0)
}

/// Rescale `vel` so its length does not exceed `max_speed`
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed && speed > 0.0 {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Velocity after bouncing off the paddle
pub fn paddle_bounce(vel: Vec2, ball_center_x: f32, paddle: &Paddle, max_speed: f32) -> Vec2 {
    let bounced = Vec2::new(vel.x + deflection(ball_center_x, paddle), -vel.y);
    clamp_speed(bounced, max_speed)
}

/// Index of the first live brick overlapping `ball_rect`, scanning in slice
/// order (row-major for a grid built by `build_bricks`)
pub fn first_brick_hit(ball_rect: &Rect, bricks: &[Brick]) -> Option<usize> {
    bricks
        .iter()
        .position(|brick| brick.alive && brick.rect.overlaps(ball_rect))
}
