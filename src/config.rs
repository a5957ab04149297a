//! Difficulty presets
//!
//! Chosen once per run and immutable for its duration. Only the active score
//! threshold escalates, and that copy lives in the run state.

use serde::{Deserialize, Serialize};

/// Named difficulty levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Parse an externally supplied name; unknown names are rejected with `None`
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// The preset parameters for this difficulty
    pub fn config(&self) -> DifficultyConfig {
        match self {
            Difficulty::Easy => DifficultyConfig {
                ball_speed: 2.0,
                brick_rows: 3,
                brick_cols: 6,
                max_hits: 1,
                paddle_speed: 7.0,
                lives: 3,
                score_threshold: 50,
            },
            Difficulty::Normal => DifficultyConfig {
                ball_speed: 3.0,
                brick_rows: 4,
                brick_cols: 8,
                max_hits: 2,
                paddle_speed: 8.0,
                lives: 2,
                score_threshold: 100,
            },
            Difficulty::Hard => DifficultyConfig {
                ball_speed: 4.0,
                brick_rows: 5,
                brick_cols: 10,
                max_hits: 3,
                paddle_speed: 10.0,
                lives: 1,
                score_threshold: 150,
            },
        }
    }
}

/// Tuning parameters fixed by a difficulty preset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Base ball speed in pixels per frame; paddle bounces rescale to this
    pub ball_speed: f32,
    pub brick_rows: u32,
    pub brick_cols: u32,
    /// Upper bound for a brick's randomly assigned hit count
    pub max_hits: u32,
    /// Paddle speed cap in pixels per frame
    pub paddle_speed: f32,
    /// Starting lives
    pub lives: u32,
    /// Score that triggers the first time/life bonus
    pub score_threshold: u32,
}
