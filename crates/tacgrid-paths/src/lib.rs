//! A* pathfinding over square and hexagonal tactical grids.
//!
//! A [`Pathfinder`] owns a [`Grid`](tacgrid_core::Grid) of [`PathNode`]s
//! and answers shortest-path queries between cells or world positions. The
//! search itself is one generic A* engine; the grid shape is a [`Topology`]
//! strategy:
//!
//! | Topology | Neighbors | Step cost |
//! |---|---|---|
//! | [`SquareTopology::eight`] | 8 (no corner-cutting check) | 10 straight, 14 diagonal |
//! | [`SquareTopology::four`] | 4 | 10 |
//! | [`HexTopology`] | 6, row-parity dependent | [`HexMetric`] |
//!
//! Costs are fixed-point integers: a straight step is 10, a diagonal 14.
//!
//! Among equally cheap candidates the search expands the one that has been
//! waiting longest, so results are reproducible query to query.
//!
//! ```
//! use tacgrid_core::Point;
//! use tacgrid_paths::SquarePathfinder;
//!
//! let mut pf = SquarePathfinder::new(5, 5, 1.0).unwrap();
//! pf.set_walkable(Point::new(2, 2), false).unwrap();
//! let path = pf.find_path(Point::new(0, 0), Point::new(4, 4)).unwrap().unwrap();
//! assert!(!path.points().contains(&Point::new(2, 2)));
//! ```

mod astar;
mod distance;
mod error;
pub mod neighbors;
mod node;
mod open;
mod path;
mod pathfinder;
mod topology;
mod traits;

pub use distance::{DIAGONAL_COST, STRAIGHT_COST, chebyshev, manhattan, octile};
pub use error::PlaceError;
pub use node::{OccupantId, PathNode, UNREACHABLE};
pub use path::Path;
pub use pathfinder::{HexPathfinder, Pathfinder, SquarePathfinder};
pub use topology::{HexMetric, HexTopology, SquareTopology};
pub use traits::Topology;
