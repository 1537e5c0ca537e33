use tacgrid_core::{Layout, Point, Range};

use crate::distance::octile;

/// Movement rules of a grid: which cells are adjacent and what a step costs.
///
/// The A* engine is generic over this trait; [`SquareTopology`] and
/// [`HexTopology`] are the provided implementations.
///
/// [`SquareTopology`]: crate::SquareTopology
/// [`HexTopology`]: crate::HexTopology
pub trait Topology {
    /// World layout the grid must use for this topology.
    fn layout(&self) -> Layout;

    /// Append the neighbors of `p` that lie inside `bounds` into `buf`.
    /// The caller clears `buf` before calling. The order is significant: it
    /// decides which of several equally good paths the search returns.
    fn neighbors(&self, p: Point, bounds: Range, buf: &mut Vec<Point>);

    /// Cost of moving from `from` to the adjacent cell `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }

    /// Heuristic estimate of the cost from `from` to `to`.
    fn estimate(&self, from: Point, to: Point) -> i32 {
        octile(from, to)
    }
}
