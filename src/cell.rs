//! A single board square and its visual/logical state.

/// One cell of a player's board.
///
/// Geometry is fixed at construction; the flags are mutated by [`Grid`]
/// (selection, placement) and [`Game`] (shot resolution). Once a cell is
/// resolved as hit or miss it stays that way for the rest of the session.
///
/// [`Grid`]: crate::Grid
/// [`Game`]: crate::Game
#[derive(Debug, Clone)]
pub struct Cell {
    center_x: f32,
    center_y: f32,
    width: f32,
    height: f32,
    highlighted: bool,
    has_ship: bool,
    hit: bool,
    miss: bool,
}

impl Cell {
    pub(crate) fn new(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Cell {
            center_x,
            center_y,
            width,
            height,
            highlighted: false,
            has_ship: false,
            hit: false,
            miss: false,
        }
    }

    /// Center of the cell in canvas units.
    pub fn center(&self) -> (f32, f32) {
        (self.center_x, self.center_y)
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn has_ship(&self) -> bool {
        self.has_ship
    }

    pub fn hit(&self) -> bool {
        self.hit
    }

    pub fn miss(&self) -> bool {
        self.miss
    }

    /// True once the cell has been shot at, either way.
    pub fn resolved(&self) -> bool {
        self.hit || self.miss
    }

    /// Flip the selection flag, returning the new state.
    pub(crate) fn toggle_highlight(&mut self) -> bool {
        self.highlighted = !self.highlighted;
        self.highlighted
    }

    pub(crate) fn put_ship(&mut self) {
        self.has_ship = true;
    }

    pub(crate) fn mark_hit(&mut self) {
        debug_assert!(!self.resolved());
        self.hit = true;
    }

    pub(crate) fn mark_miss(&mut self) {
        debug_assert!(!self.resolved());
        self.miss = true;
    }
}
