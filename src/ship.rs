//! Ship classes, orientation and the placed-ship footprint.

use crate::cell::Cell;
use crate::config::CELL_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Orientation of the straight segment spanned by two selected cells,
    /// or `None` when the endpoints are not row- or column-aligned with an
    /// index delta of exactly `length - 1`.
    pub fn of_segment(a: (usize, usize), b: (usize, usize), length: usize) -> Option<Self> {
        let span = length - 1;
        if a.0 == b.0 && a.1.abs_diff(b.1) == span {
            Some(Orientation::Horizontal)
        } else if a.1 == b.1 && a.0.abs_diff(b.0) == span {
            Some(Orientation::Vertical)
        } else {
            None
        }
    }
}

/// Class of ship: name and length in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipClass {
    name: &'static str,
    length: usize,
}

impl ShipClass {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn length(&self) -> usize {
        self.length
    }
}

/// Visual footprint of a placed ship in canvas units.
///
/// A ship is not linked to the cells it occupies; occupancy lives on the
/// owning grid's cells and is recorded by the same placement attempt that
/// creates the ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ship {
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    orientation: Orientation,
}

impl Ship {
    /// Footprint spanning the two endpoint cells of a placed segment.
    pub(crate) fn spanning(class: ShipClass, a: &Cell, b: &Cell, orientation: Orientation) -> Self {
        let (ax, ay) = a.center();
        let (bx, by) = b.center();
        Ship {
            center_x: (ax + bx) / 2.0,
            center_y: (ay + by) / 2.0,
            width: class.length() as f32 * CELL_SIZE,
            height: CELL_SIZE,
            orientation,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
