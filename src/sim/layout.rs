//! Brick field layout
//!
//! Computes per-brick dimensions and the grid offset from the canvas size and
//! the difficulty's row/column counts. The grid is centered horizontally
//! within the padded canvas width and vertically within the padded top half.
//! Recomputed only when a run starts; never mid-run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Display surface dimensions, supplied by the host at difficulty selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

/// Shared brick dimensions and the top-left corner of the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickLayout {
    pub brick_width: f32,
    pub brick_height: f32,
    pub offset_left: f32,
    pub offset_top: f32,
}

impl BrickLayout {
    pub fn compute(canvas: CanvasSize, rows: u32, cols: u32) -> Self {
        let avail_width = canvas.width - 2.0 * CANVAS_PADDING;
        let avail_height = canvas.height / 2.0 - 2.0 * CANVAS_PADDING;

        let brick_width = (avail_width / cols as f32 - BRICK_PADDING).floor();
        let brick_height = BRICK_HEIGHT;

        // Trailing gap excluded from the grid extent
        let total_width = cols as f32 * (brick_width + BRICK_PADDING) - BRICK_PADDING;
        let total_height = rows as f32 * (brick_height + BRICK_PADDING) - BRICK_PADDING;

        Self {
            brick_width,
            brick_height,
            offset_left: CANVAS_PADDING + (avail_width - total_width) / 2.0,
            offset_top: CANVAS_PADDING + (avail_height - total_height) / 2.0,
        }
    }

    /// Top-left corner of the brick at the given grid cell
    pub fn brick_origin(&self, col: u32, row: u32) -> Vec2 {
        Vec2::new(
            self.offset_left + col as f32 * (self.brick_width + BRICK_PADDING),
            self.offset_top + row as f32 * (self.brick_height + BRICK_PADDING),
        )
    }
}
