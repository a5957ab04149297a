//! Game state and core simulation types
//!
//! The frame driver owns one `GameState` per run; everything mutable lives
//! here and is rebuilt wholesale when a difficulty is (re)selected.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use super::layout::{BrickLayout, CanvasSize};
use super::particles::{Particle, TrailParticle};
use crate::config::{Difficulty, DifficultyConfig};
use crate::consts::*;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// No difficulty selected yet
    Idle,
    /// Active gameplay
    Running,
    /// Every brick destroyed
    Won,
    /// Out of lives or out of time
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// Observable state changes, drained by the presentation layer after each
/// frame. Missing observers are fine; undrained events are just dropped on
/// restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    ScoreChanged(u32),
    ComboChanged(u32),
    LivesChanged(u32),
    TimerChanged(i32),
    BrickDestroyed { col: u32, row: u32 },
    BallLost,
    BonusTime,
    BonusLife,
    GameWon,
    GameLost,
}

/// The ball
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Speed the ball returns to on every paddle bounce; wall and brick
    /// bounces only negate a component, so speed never accumulates
    pub base_speed: f32,
}

impl Ball {
    /// Spawn at the canvas center, a fixed height above the bottom edge,
    /// heading up and to the right at base speed
    pub fn spawn(canvas: CanvasSize, base_speed: f32) -> Self {
        Self {
            pos: Vec2::new(canvas.width / 2.0, canvas.height - BALL_SPAWN_OFFSET),
            vel: Vec2::new(base_speed, -base_speed),
            radius: BALL_RADIUS,
            base_speed,
        }
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Paddle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Signed horizontal speed, bounded by `max_speed`
    pub speed: f32,
    pub max_speed: f32,
}

impl Paddle {
    pub fn centered(canvas: CanvasSize, max_speed: f32) -> Self {
        Self {
            x: (canvas.width - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: 0.0,
            max_speed,
        }
    }

    /// One frame of the acceleration/friction model. Holding one direction
    /// ramps speed toward that side's cap; otherwise speed decays
    /// geometrically rather than stopping dead.
    pub fn step(&mut self, left: bool, right: bool, canvas_width: f32) {
        if left && !right {
            self.speed = (self.speed - PADDLE_ACCELERATION).max(-self.max_speed);
        } else if right && !left {
            self.speed = (self.speed + PADDLE_ACCELERATION).min(self.max_speed);
        } else {
            self.speed *= PADDLE_FRICTION;
        }

        self.x += self.speed;
        self.clamp_to(canvas_width);
    }

    /// Absolute pointer positioning; bypasses the speed model entirely
    pub fn set_center(&mut self, pointer_x: f32, canvas_width: f32) {
        self.x = pointer_x - self.width / 2.0;
        self.clamp_to(canvas_width);
    }

    pub fn recenter(&mut self, canvas_width: f32) {
        self.x = (canvas_width - self.width) / 2.0;
        self.speed = 0.0;
    }

    /// Inelastic wall stop: hitting a bound zeroes the speed
    fn clamp_to(&mut self, canvas_width: f32) {
        if self.x < 0.0 {
            self.x = 0.0;
            self.speed = 0.0;
        } else if self.x + self.width > canvas_width {
            self.x = canvas_width - self.width;
            self.speed = 0.0;
        }
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Brick {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Remaining hits; 0 means destroyed and ignored thereafter
    pub status: u32,
    pub max_hits: u32,
}

impl Brick {
    /// Strict interior containment; grazing the border is a miss
    pub fn contains(&self, p: Vec2) -> bool {
        p.x > self.x && p.x < self.x + self.width && p.y > self.y && p.y < self.y + self.height
    }

    pub fn is_destroyed(&self) -> bool {
        self.status == 0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Remaining-hits fraction: 1.0 fresh, 0.0 destroyed
    pub fn hit_ratio(&self) -> f32 {
        self.status as f32 / self.max_hits as f32
    }
}

/// Brick field, indexed `[col][row]` to keep the column-major scan order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BrickGrid {
    columns: Vec<Vec<Brick>>,
}

impl BrickGrid {
    /// Build a fresh cols x rows grid; each brick's hit count is drawn
    /// uniformly from `1..=max_hits`
    pub fn generate(config: &DifficultyConfig, layout: &BrickLayout, rng: &mut Pcg32) -> Self {
        let mut columns = Vec::with_capacity(config.brick_cols as usize);
        for c in 0..config.brick_cols {
            let mut column = Vec::with_capacity(config.brick_rows as usize);
            for r in 0..config.brick_rows {
                let hits = rng.random_range(1..=config.max_hits);
                let origin = layout.brick_origin(c, r);
                column.push(Brick {
                    x: origin.x,
                    y: origin.y,
                    width: layout.brick_width,
                    height: layout.brick_height,
                    status: hits,
                    max_hits: hits,
                });
            }
            columns.push(column);
        }
        Self { columns }
    }

    /// Test helper: build a grid from explicit columns
    #[cfg(test)]
    pub(crate) fn from_columns(columns: Vec<Vec<Brick>>) -> Self {
        Self { columns }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.is_empty())
    }

    /// Win predicate: every brick destroyed. An uninitialized (empty) grid is
    /// never a win.
    pub fn all_destroyed(&self) -> bool {
        !self.is_empty() && self.iter().all(|b| b.is_destroyed())
    }

    pub fn remaining(&self) -> usize {
        self.iter().filter(|b| !b.is_destroyed()).count()
    }

    pub fn columns(&self) -> &[Vec<Brick>] {
        &self.columns
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Brick> {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    pub fn get_mut(&mut self, col: usize, row: usize) -> Option<&mut Brick> {
        self.columns.get_mut(col).and_then(|c| c.get_mut(row))
    }

    /// Column-major, then row-major iteration (the scan order)
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.columns.iter().flatten()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.columns.iter_mut().flatten()
    }
}

/// Complete run state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub difficulty: Difficulty,
    pub config: DifficultyConfig,
    pub canvas: CanvasSize,
    pub layout: BrickLayout,
    pub phase: GamePhase,
    pub score: u32,
    pub lives: u32,
    /// Consecutive-hit counter; reset to 1 on any paddle bounce or life loss
    pub combo_count: u32,
    /// Countdown in whole seconds, decremented by `second_tick`
    pub timer_secs: i32,
    /// Active score milestone; rises by `THRESHOLD_STEP` each crossing
    pub score_threshold: u32,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickGrid,
    /// Explosion pool (cosmetic)
    pub particles: Vec<Particle>,
    /// Trail pool (cosmetic, capped)
    pub trail_particles: Vec<TrailParticle>,
    /// Pending observer events, drained by the host
    pub events: Vec<GameEvent>,
    pub frame_count: u64,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh Running state for the given difficulty and canvas
    pub fn new(difficulty: Difficulty, canvas: CanvasSize, seed: u64) -> Self {
        let config = difficulty.config();
        debug_assert!(config.brick_rows * config.brick_cols >= 1);

        let layout = BrickLayout::compute(canvas, config.brick_rows, config.brick_cols);
        let mut rng = Pcg32::seed_from_u64(seed);
        let bricks = BrickGrid::generate(&config, &layout, &mut rng);

        Self {
            seed,
            difficulty,
            config,
            canvas,
            layout,
            phase: GamePhase::Running,
            score: 0,
            lives: config.lives,
            combo_count: 0,
            timer_secs: RUN_TIME_SECS,
            score_threshold: config.score_threshold,
            ball: Ball::spawn(canvas, config.ball_speed),
            paddle: Paddle::centered(canvas, config.paddle_speed),
            bricks,
            particles: Vec::new(),
            trail_particles: Vec::new(),
            events: Vec::new(),
            frame_count: 0,
            rng,
        }
    }

    /// After a non-final life loss: ball back to spawn, paddle recentered
    pub(crate) fn reset_ball_and_paddle(&mut self) {
        self.ball = Ball::spawn(self.canvas, self.config.ball_speed);
        self.paddle.recenter(self.canvas.width);
    }

    pub(crate) fn set_combo(&mut self, value: u32) {
        if self.combo_count != value {
            self.combo_count = value;
            self.events.push(GameEvent::ComboChanged(value));
        }
    }

    /// Drain pending observer events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }
}
