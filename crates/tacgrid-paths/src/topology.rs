//! The two grid topologies the pathfinder understands.

use tacgrid_core::{Layout, Point, Range};

use crate::distance::{STRAIGHT_COST, chebyshev, manhattan, octile};
use crate::neighbors;
use crate::traits::Topology;

// ---------------------------------------------------------------------------
// Square
// ---------------------------------------------------------------------------

/// Square cells with 4 or 8 neighbors.
///
/// With diagonals, steps cost 10 straight and 14 diagonal and the octile
/// distance is the heuristic. Without, every step costs 10 and the
/// heuristic is 10 × Manhattan distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareTopology {
    diagonals: bool,
}

impl SquareTopology {
    /// Orthogonal moves only.
    pub const fn four() -> Self {
        Self { diagonals: false }
    }

    /// Orthogonal and diagonal moves.
    pub const fn eight() -> Self {
        Self { diagonals: true }
    }

    pub const fn allows_diagonals(&self) -> bool {
        self.diagonals
    }
}

impl Default for SquareTopology {
    fn default() -> Self {
        Self::eight()
    }
}

impl Topology for SquareTopology {
    fn layout(&self) -> Layout {
        Layout::Square
    }

    fn neighbors(&self, p: Point, bounds: Range, buf: &mut Vec<Point>) {
        if self.diagonals {
            neighbors::square_8(p, bounds, buf);
        } else {
            neighbors::square_4(p, bounds, buf);
        }
    }

    fn cost(&self, from: Point, to: Point) -> i32 {
        self.estimate(from, to)
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        if self.diagonals {
            octile(from, to)
        } else {
            STRAIGHT_COST * manhattan(from, to)
        }
    }
}

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

/// Cost function applied to hexagon steps and estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HexMetric {
    /// Octile distance in array coordinates: side steps cost 10, steps to
    /// the adjacent rows cost 10 straight up/down and 14 across.
    ///
    /// This is not true hexagon distance; the search is optimal under this
    /// cost, not under geometric distance.
    #[default]
    Octile,
    /// Every step costs 10; estimates are 10 × Chebyshev distance.
    Chebyshev,
}

/// Offset hexagons, odd rows shifted right by half a cell, 6 neighbors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexTopology {
    metric: HexMetric,
}

impl HexTopology {
    pub const fn new(metric: HexMetric) -> Self {
        Self { metric }
    }

    pub const fn metric(&self) -> HexMetric {
        self.metric
    }
}

impl Topology for HexTopology {
    fn layout(&self) -> Layout {
        Layout::HexOddRow
    }

    fn neighbors(&self, p: Point, bounds: Range, buf: &mut Vec<Point>) {
        neighbors::hex_odd_row(p, bounds, buf);
    }

    fn cost(&self, from: Point, to: Point) -> i32 {
        self.estimate(from, to)
    }

    fn estimate(&self, from: Point, to: Point) -> i32 {
        match self.metric {
            HexMetric::Octile => octile(from, to),
            HexMetric::Chebyshev => STRAIGHT_COST * chebyshev(from, to),
        }
    }
}
