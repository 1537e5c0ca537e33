use tacgrid_core::GridError;
use thiserror::Error;

use crate::node::OccupantId;

/// Why an occupant could not be placed on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlaceError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The cell already holds someone.
    #[error("cell is already occupied by {0:?}")]
    Occupied(OccupantId),
}
