//! Collision detection and response
//!
//! Axis-aligned checks evaluated before position integration. Wall and paddle
//! predicates test the position the ball is about to move to; the brick scan
//! tests the center it currently occupies. That asymmetry is part of the
//! game's established feel and is kept on purpose.

use glam::Vec2;

use super::state::{Ball, BrickGrid, Paddle};

/// Outcome of the paddle-zone check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleOutcome {
    /// Ball not yet down at paddle height
    None,
    /// Ball rebounded off the paddle
    Bounce,
    /// Ball missed the paddle and reached the bottom edge
    Missed,
}

/// Reflect off the side walls if the projected x would leave the canvas.
/// Returns true when a bounce happened (for the impact effect).
pub fn wall_reflect_x(ball: &mut Ball, canvas_width: f32) -> bool {
    let next_x = ball.pos.x + ball.vel.x;
    if next_x > canvas_width - ball.radius || next_x < ball.radius {
        ball.vel.x = -ball.vel.x;
        true
    } else {
        false
    }
}

/// Reflect off the top wall. The bottom has no wall; that territory belongs
/// to the paddle check.
pub fn wall_reflect_top(ball: &mut Ball) -> bool {
    if ball.pos.y + ball.vel.y < ball.radius {
        ball.vel.y = -ball.vel.y;
        true
    } else {
        false
    }
}

/// Where along the paddle the ball struck: 0.0 = left edge, 1.0 = right edge
pub fn hit_point(ball_x: f32, paddle: &Paddle) -> f32 {
    (ball_x - paddle.x) / paddle.width
}

/// Velocity after a paddle bounce: linear ramp on dx (center hit goes
/// straight up, edge hit deflects at full base speed), dy always straight
/// back up at base speed regardless of the incoming angle
pub fn paddle_bounce_velocity(base_speed: f32, hit: f32) -> Vec2 {
    Vec2::new(base_speed * (hit - 0.5) * 2.0, -base_speed)
}

/// Paddle-zone check against the projected ball position
pub fn check_paddle(ball: &Ball, paddle: &Paddle, canvas_height: f32) -> PaddleOutcome {
    let next_y = ball.pos.y + ball.vel.y;
    if next_y > canvas_height - ball.radius - paddle.height {
        if ball.pos.x > paddle.x && ball.pos.x < paddle.x + paddle.width {
            return PaddleOutcome::Bounce;
        }
        if next_y > canvas_height - ball.radius {
            return PaddleOutcome::Missed;
        }
    }
    PaddleOutcome::None
}

/// Column-major, then row-major scan for the first live brick containing the
/// ball's current center. At most one brick is resolved per frame; the scan
/// stops at the first hit even if several bricks overlap the ball.
pub fn find_brick_hit(grid: &BrickGrid, ball_pos: Vec2) -> Option<(usize, usize)> {
    for (c, column) in grid.columns().iter().enumerate() {
        for (r, brick) in column.iter().enumerate() {
            if !brick.is_destroyed() && brick.contains(ball_pos) {
                return Some((c, r));
            }
        }
    }
    None
}
