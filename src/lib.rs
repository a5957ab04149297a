//! Combo Breaker - a brick-breaking arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, entities, collisions, particles, tick)
//! - `config`: Difficulty presets
//! - `driver`: Frame driver that steps the simulation and runs the countdown
//!
//! The crate never draws. Each frame the presentation layer samples input into
//! a [`sim::FrameInput`], calls [`driver::GameDriver::frame`], and renders the
//! [`sim::Scene`] however it likes.

pub mod config;
pub mod driver;
pub mod sim;

pub use config::{Difficulty, DifficultyConfig};
pub use driver::{BackgroundImage, FrameHandle, FrameStatus, GameDriver};
pub use sim::layout::CanvasSize;

/// Game configuration constants
pub mod consts {
    /// Outer margin between the canvas edge and the brick field
    pub const CANVAS_PADDING: f32 = 20.0;
    /// Gap between neighboring bricks
    pub const BRICK_PADDING: f32 = 5.0;
    /// Brick height is fixed, not derived from the available space
    pub const BRICK_HEIGHT: f32 = 20.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Height of the ball spawn point above the bottom edge
    pub const BALL_SPAWN_OFFSET: f32 = 30.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Speed change per frame while a direction key is held
    pub const PADDLE_ACCELERATION: f32 = 1.0;
    /// Geometric per-frame speed decay when no key (or both keys) are held
    pub const PADDLE_FRICTION: f32 = 0.85;

    /// Countdown length at the start of every run (seconds)
    pub const RUN_TIME_SECS: i32 = 60;
    /// Seconds added by a timer bonus
    pub const TIME_BONUS_SECS: i32 = 2;
    /// Amount the score threshold rises after each bonus
    pub const THRESHOLD_STEP: u32 = 50;

    /// Particles in a brick explosion burst
    pub const EXPLOSION_PARTICLES: usize = 20;
    /// Particles in a wall impact burst
    pub const IMPACT_PARTICLES: usize = 8;
    /// Cap on live trail particles; spawning is suppressed at the cap
    pub const MAX_TRAIL_PARTICLES: usize = 50;
}
