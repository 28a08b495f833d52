//! Pointer coordinate mapping between window pixels and canvas units.

use crate::config::{BOARD_SIZE, CANVAS_HEIGHT, CANVAS_WIDTH, CELL_SIZE, GRID_Y_OFFSET};

/// A position in canvas units.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

/// Map a pointer position in window pixels to canvas units.
///
/// Pure scaling; an out-of-range pointer simply yields an out-of-range
/// canvas position, which [`cell_at`] rejects.
pub fn cursor_to_canvas(px: f32, py: f32, screen_w: f32, screen_h: f32) -> CanvasPoint {
    CanvasPoint {
        x: px / screen_w * CANVAS_WIDTH,
        y: py / screen_h * CANVAS_HEIGHT,
    }
}

/// Board cell addressed by a canvas position, or `None` when the position
/// falls outside the board (including the status band above it).
pub fn cell_at(pos: CanvasPoint) -> Option<(usize, usize)> {
    if pos.x < 0.0 || pos.y < GRID_Y_OFFSET {
        return None;
    }
    let col = (pos.x / CELL_SIZE) as usize;
    let row = ((pos.y - GRID_Y_OFFSET) / CELL_SIZE) as usize;
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return None;
    }
    Some((row, col))
}
