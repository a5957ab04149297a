//! Renderable state for the presentation layer
//!
//! The core never touches pixels. Each frame the host captures a `Scene` and
//! draws it however it likes; the colors here are the ones the original
//! canvas renderer used, precomputed so the host doesn't have to know the
//! gameplay rules behind them.

use serde::Serialize;

use super::particles::{BALL_COLOR, Particle, Rgb, TrailParticle};
use super::state::{Ball, Brick, GamePhase, GameState, Paddle};

/// Brick fill color: green at full strength shading to red as hits accumulate
pub fn brick_color(brick: &Brick) -> Rgb {
    let ratio = brick.hit_ratio();
    Rgb((255.0 * (1.0 - ratio)) as u8, (255.0 * ratio) as u8, 0)
}

/// A live brick with its display color and remaining-hits label
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SceneBrick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub hits_left: u32,
    pub color: Rgb,
}

/// One frame's renderable state
#[derive(Debug, Serialize)]
pub struct Scene<'a> {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    pub combo: u32,
    pub timer_secs: i32,
    pub ball: &'a Ball,
    pub ball_color: Rgb,
    pub paddle: &'a Paddle,
    /// Top edge of the paddle; it always sits on the bottom of the canvas
    pub paddle_y: f32,
    /// Live bricks only; destroyed cells are simply absent
    pub bricks: Vec<SceneBrick>,
    pub particles: &'a [Particle],
    pub trail: &'a [TrailParticle],
}

impl<'a> Scene<'a> {
    pub fn capture(state: &'a GameState) -> Self {
        let bricks = state
            .bricks
            .iter()
            .filter(|b| !b.is_destroyed())
            .map(|b| SceneBrick {
                x: b.x,
                y: b.y,
                width: b.width,
                height: b.height,
                hits_left: b.status,
                color: brick_color(b),
            })
            .collect();

        Self {
            phase: state.phase,
            score: state.score,
            lives: state.lives,
            combo: state.combo_count,
            timer_secs: state.timer_secs,
            ball: &state.ball,
            ball_color: BALL_COLOR,
            paddle: &state.paddle,
            paddle_y: state.canvas.height - state.paddle.height,
            bricks,
            particles: &state.particles,
            trail: &state.trail_particles,
        }
    }
}
