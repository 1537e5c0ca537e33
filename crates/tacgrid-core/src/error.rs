use thiserror::Error;

use crate::geom::{Point, WorldPos};

/// Errors raised by grid construction and cell lookup.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    /// Width or height is not positive, or the cell count does not fit in
    /// memory addressing.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// Cell size is not a finite positive number.
    #[error("invalid cell size {0}")]
    InvalidCellSize(f32),

    /// A coordinate outside `[0, width) × [0, height)`.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Point),

    /// A world position with a NaN or infinite coordinate.
    #[error("world position {0} is not finite")]
    InvalidPosition(WorldPos),
}
