//! One player's board: a fixed matrix of cells with selection tracking,
//! straight-line ship placement and shot bookkeeping.

use log::debug;

use crate::cell::Cell;
use crate::common::{GridError, ShotResult};
use crate::config::{BOARD_SIZE, CELL_SIZE, GRID_Y_OFFSET};
use crate::coords::{self, CanvasPoint};

/// A 10×10 board owned by one player, indexed `[row][col]`.
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    highlighted: usize,
    hits: usize,
}

impl Grid {
    /// Create an empty grid with cell geometry derived from the canvas layout.
    pub fn new() -> Self {
        let cells = core::array::from_fn(|row| {
            core::array::from_fn(|col| {
                let cx = (col as f32 + 0.5) * CELL_SIZE;
                let cy = GRID_Y_OFFSET + (row as f32 + 0.5) * CELL_SIZE;
                Cell::new(cx, cy, CELL_SIZE, CELL_SIZE)
            })
        });
        Grid {
            cells,
            highlighted: 0,
            hits: 0,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Number of currently highlighted cells.
    pub fn highlighted_count(&self) -> usize {
        self.highlighted
    }

    /// Shots by this grid's owner that landed on opponent ships.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Toggle the highlight of the cell addressed by a canvas position.
    ///
    /// Positions outside the board are ignored and `false` is returned.
    pub fn toggle_highlight_at(&mut self, pos: CanvasPoint) -> bool {
        let Some((row, col)) = coords::cell_at(pos) else {
            debug!("click at ({:.0}, {:.0}) is outside the board", pos.x, pos.y);
            return false;
        };
        if self.cells[row][col].toggle_highlight() {
            self.highlighted += 1;
        } else {
            self.highlighted -= 1;
        }
        true
    }

    /// Highlighted cells as `(row, col)` pairs in row-major scan order.
    pub fn selected_cells(&self) -> Vec<(usize, usize)> {
        let mut selected = Vec::with_capacity(self.highlighted);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].highlighted() {
                    selected.push((row, col));
                }
            }
        }
        selected
    }

    /// Clear every highlight.
    pub fn deselect_all(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                if cell.highlighted() {
                    let _ = cell.toggle_highlight();
                }
            }
        }
        self.highlighted = 0;
    }

    /// Place a ship on the inclusive straight segment between two endpoints.
    ///
    /// Fails without touching any cell when the segment is not row- or
    /// column-aligned or when any cell on it already holds a ship. The
    /// caller is responsible for checking the segment length.
    pub fn place_ship(
        &mut self,
        r1: usize,
        c1: usize,
        r2: usize,
        c2: usize,
    ) -> Result<(), GridError> {
        for &(row, col) in &[(r1, c1), (r2, c2)] {
            if row >= BOARD_SIZE || col >= BOARD_SIZE {
                return Err(GridError::OutOfBounds { row, col });
            }
        }
        if r1 == r2 {
            let (lo, hi) = (c1.min(c2), c1.max(c2));
            for col in lo..=hi {
                if self.cells[r1][col].has_ship() {
                    return Err(GridError::ShipOverlaps);
                }
            }
            for col in lo..=hi {
                self.cells[r1][col].put_ship();
            }
        } else if c1 == c2 {
            let (lo, hi) = (r1.min(r2), r1.max(r2));
            for row in lo..=hi {
                if self.cells[row][c1].has_ship() {
                    return Err(GridError::ShipOverlaps);
                }
            }
            for row in lo..=hi {
                self.cells[row][c1].put_ship();
            }
        } else {
            return Err(GridError::NotStraight);
        }
        Ok(())
    }

    /// Record a resolved shot on this grid's cell.
    ///
    /// A cell can be resolved at most once; a second attempt fails with
    /// `AlreadyResolved` and changes nothing.
    pub fn record_shot(
        &mut self,
        row: usize,
        col: usize,
        result: ShotResult,
    ) -> Result<(), GridError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GridError::OutOfBounds { row, col });
        }
        if self.cells[row][col].resolved() {
            return Err(GridError::AlreadyResolved);
        }
        match result {
            ShotResult::Hit => {
                self.cells[row][col].mark_hit();
                self.hits += 1;
            }
            ShotResult::Miss => self.cells[row][col].mark_miss(),
        }
        Ok(())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
