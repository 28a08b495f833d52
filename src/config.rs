//! Board geometry and fleet roster shared by the whole crate.

use crate::ship::ShipClass;

/// Cells per board side.
pub const BOARD_SIZE: usize = 10;

/// Ships each player must place before shooting starts.
pub const NUM_SHIPS: usize = 3;

/// Fleet roster, in placement order.
pub const SHIPS: [ShipClass; NUM_SHIPS] = [
    ShipClass::new("Patrol boat", 2),
    ShipClass::new("Cruiser", 3),
    ShipClass::new("Battleship", 4),
];

/// Total ship cells per fleet; landing this many hits wins the game.
pub const TOTAL_SHIP_CELLS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < NUM_SHIPS {
        total += SHIPS[i].length();
        i += 1;
    }
    total
};

/// Side length of one board cell in canvas units.
pub const CELL_SIZE: f32 = 100.0;

/// Vertical canvas offset of the board; the band above it holds the status text.
pub const GRID_Y_OFFSET: f32 = 2.0 * CELL_SIZE;

/// Default window size in pixels.
pub const PIXEL_WIDTH: f32 = 5.0 * CELL_SIZE;
pub const PIXEL_HEIGHT: f32 = 6.0 * CELL_SIZE;

/// Logical canvas size; all game geometry is expressed in these units.
pub const CANVAS_WIDTH: f32 = BOARD_SIZE as f32 * CELL_SIZE;
pub const CANVAS_HEIGHT: f32 = GRID_Y_OFFSET + BOARD_SIZE as f32 * CELL_SIZE;
