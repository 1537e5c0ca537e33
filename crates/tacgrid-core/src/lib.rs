//! **tacgrid-core**: grid storage and geometry for tactical maps.
//!
//! This crate provides the foundational types used by the pathfinding
//! crate: integer cell coordinates, a generic fixed-size [`Grid`] that owns
//! one payload per cell, and the mapping between cells and continuous world
//! positions for square and offset-hexagon layouts.

pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use config::GridConfig;
pub use error::GridError;
pub use geom::{Point, Range, RangeIter, WorldPos};
pub use grid::{Grid, Layout, ListenerId};
