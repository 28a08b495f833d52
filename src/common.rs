//! Common types: shot outcomes and grid errors.

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on an opponent ship cell.
    Hit,
    /// Shot landed on open water.
    Miss,
}

/// Errors returned by Grid and Game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside [0..BOARD_SIZE).
    OutOfBounds { row: usize, col: usize },
    /// Segment endpoints share neither a row nor a column.
    NotStraight,
    /// Ship placement overlaps with another ship.
    ShipOverlaps,
    /// The addressed cell was already resolved as hit or miss.
    AlreadyResolved,
    /// A shot was attempted with no cell selected.
    NoSelection,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "Index is out of range: row={}, col={}", row, col)
            }
            GridError::NotStraight => write!(f, "Segment endpoints are not aligned"),
            GridError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GridError::AlreadyResolved => write!(f, "Cell was already shot at"),
            GridError::NoSelection => write!(f, "No cell is selected"),
        }
    }
}
