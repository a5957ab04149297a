//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per display frame
//! - Seeded RNG only
//! - Stable brick scan order (column-major, then row-major)
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod particles;
pub mod scene;
pub mod state;
pub mod tick;

pub use layout::{BrickLayout, CanvasSize};
pub use particles::{Particle, Rgb, TrailParticle};
pub use scene::{Scene, SceneBrick};
pub use state::{Ball, Brick, BrickGrid, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{FrameInput, second_tick, tick};
