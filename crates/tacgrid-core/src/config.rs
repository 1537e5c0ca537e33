//! Grid construction parameters.

use crate::error::GridError;
use crate::geom::WorldPos;
use crate::grid::Layout;

/// Dimensions and world placement of a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width: i32,
    pub height: i32,
    /// Side of one cell in world units.
    pub cell_size: f32,
    /// World position of cell (0, 0).
    pub origin: WorldPos,
    pub layout: Layout,
}

impl GridConfig {
    /// A square-layout config anchored at the world origin.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Self {
        Self {
            width,
            height,
            cell_size,
            origin: WorldPos::ZERO,
            layout: Layout::Square,
        }
    }

    pub fn with_origin(mut self, origin: WorldPos) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Number of cells, after validation.
    pub fn cell_count(&self) -> Result<usize, GridError> {
        self.validate()?;
        // validate() guarantees the product fits.
        Ok(self.width as usize * self.height as usize)
    }

    /// Reject non-positive dimensions and unusable cell sizes.
    pub fn validate(&self) -> Result<(), GridError> {
        let bad_dims = GridError::InvalidDimensions {
            width: self.width,
            height: self.height,
        };
        if self.width <= 0 || self.height <= 0 {
            return Err(bad_dims);
        }
        if (self.width as usize).checked_mul(self.height as usize).is_none() {
            return Err(bad_dims);
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(GridError::InvalidCellSize(self.cell_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = GridConfig::new(4, 3, 1.5);
        assert_eq!(c.origin, WorldPos::ZERO);
        assert_eq!(c.layout, Layout::Square);
        assert_eq!(c.cell_count(), Ok(12));
    }

    #[test]
    fn builder_overrides() {
        let c = GridConfig::new(2, 2, 1.0)
            .with_origin(WorldPos::new(-3.0, 7.0))
            .with_layout(Layout::HexOddRow);
        assert_eq!(c.origin, WorldPos::new(-3.0, 7.0));
        assert_eq!(c.layout, Layout::HexOddRow);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        for (w, h) in [(0, 5), (5, 0), (-1, 3), (3, -7), (0, 0)] {
            assert_eq!(
                GridConfig::new(w, h, 1.0).validate(),
                Err(GridError::InvalidDimensions { width: w, height: h })
            );
        }
    }

    #[test]
    fn rejects_bad_cell_size() {
        assert_eq!(
            GridConfig::new(3, 3, 0.0).validate(),
            Err(GridError::InvalidCellSize(0.0))
        );
        assert_eq!(
            GridConfig::new(3, 3, -2.0).validate(),
            Err(GridError::InvalidCellSize(-2.0))
        );
        assert!(GridConfig::new(3, 3, f32::NAN).validate().is_err());
        assert!(GridConfig::new(3, 3, f32::INFINITY).validate().is_err());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_round_trip() {
        let c = GridConfig::new(35, 26, 1.0)
            .with_origin(WorldPos::new(0.5, -2.0))
            .with_layout(Layout::HexOddRow);
        let json = serde_json::to_string(&c).unwrap();
        let back: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
