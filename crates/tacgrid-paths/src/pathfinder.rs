use tacgrid_core::{Grid, GridConfig, GridError, Point, WorldPos};

use crate::astar::Search;
use crate::error::PlaceError;
use crate::node::{OccupantId, PathNode};
use crate::path::Path;
use crate::topology::{HexTopology, SquareTopology};
use crate::traits::Topology;

/// Pathfinder over square cells.
pub type SquarePathfinder = Pathfinder<SquareTopology>;

/// Pathfinder over odd-row-shifted hexagons.
pub type HexPathfinder = Pathfinder<HexTopology>;

/// Owns a grid of [`PathNode`]s and answers shortest-path queries on it.
///
/// Walkability changes go through [`set_walkable`](Pathfinder::set_walkable)
/// so that the grid's cell-changed listeners hear about them. Queries reset
/// the whole grid's search state, so one pathfinder serves one query at a
/// time; do not toggle cells from another thread while a query runs.
pub struct Pathfinder<T: Topology> {
    grid: Grid<PathNode>,
    topology: T,
    search: Search,
}

impl<T: Topology + Default> Pathfinder<T> {
    /// A `width × height` grid of walkable cells anchored at the world origin.
    pub fn new(width: i32, height: i32, cell_size: f32) -> Result<Self, GridError> {
        Self::with_topology(GridConfig::new(width, height, cell_size), T::default())
    }

    /// Build from a [`GridConfig`] with the default topology.
    pub fn from_config(config: GridConfig) -> Result<Self, GridError> {
        Self::with_topology(config, T::default())
    }
}

impl<T: Topology> Pathfinder<T> {
    /// Build from a [`GridConfig`] and an explicit topology. The config's
    /// layout is replaced by the one the topology requires.
    pub fn with_topology(config: GridConfig, topology: T) -> Result<Self, GridError> {
        let config = config.with_layout(topology.layout());
        let grid = Grid::from_config(config, PathNode::new)?;
        Ok(Self {
            grid,
            topology,
            search: Search::default(),
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid<PathNode> {
        &self.grid
    }

    /// Mutable grid access, e.g. to register cell-changed listeners.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid<PathNode> {
        &mut self.grid
    }

    #[inline]
    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// The node at `p`.
    pub fn node(&self, p: Point) -> Result<&PathNode, GridError> {
        self.grid.get(p)
    }

    /// The node at `p`, mutably (occupant bookkeeping).
    pub fn node_mut(&mut self, p: Point) -> Result<&mut PathNode, GridError> {
        self.grid.get_mut(p)
    }

    /// Mark the cell at `p` walkable or blocked and notify listeners. Takes
    /// effect from the next query on.
    pub fn set_walkable(&mut self, p: Point, walkable: bool) -> Result<(), GridError> {
        log::trace!("cell {p} walkable = {walkable}");
        self.grid.update(p, |node| node.set_walkable(walkable))
    }

    /// Put `occupant` on the cell at `p`, refusing if the cell is taken.
    pub fn place_occupant(&mut self, p: Point, occupant: OccupantId) -> Result<(), PlaceError> {
        let node = self.grid.get_mut(p)?;
        if let Some(existing) = node.occupant() {
            log::debug!("cannot place {occupant:?} on {p}: occupied by {existing:?}");
            return Err(PlaceError::Occupied(existing));
        }
        node.set_occupant(Some(occupant));
        Ok(())
    }

    /// Empty the cell at `p`, returning whoever was there.
    pub fn clear_occupant(&mut self, p: Point) -> Result<Option<OccupantId>, GridError> {
        Ok(self.grid.get_mut(p)?.set_occupant(None))
    }

    /// Cheapest path between two cells.
    ///
    /// `Err(OutOfBounds)` if either endpoint is outside the grid, `Ok(None)`
    /// if no walkable route connects them. `start == end` yields the single
    /// cell `[start]`.
    pub fn find_path(&mut self, start: Point, end: Point) -> Result<Option<Path>, GridError> {
        log::debug!("find_path {start} -> {end}");
        self.search.astar(&mut self.grid, &self.topology, start, end)
    }

    /// Cheapest path between the cells containing two world positions, as
    /// the world anchors of the cells along the way.
    ///
    /// `Err(InvalidPosition)` if either position has a NaN or infinite
    /// coordinate, `Err(OutOfBounds)` if it falls outside the grid.
    pub fn find_world_path(
        &mut self,
        start: WorldPos,
        end: WorldPos,
    ) -> Result<Option<Vec<WorldPos>>, GridError> {
        let from = self.grid.locate(start)?;
        let to = self.grid.locate(end)?;
        let path = self.find_path(from, to)?;
        Ok(path.map(|path| path.iter().map(|&p| self.grid.cell_to_world(p)).collect()))
    }

    /// Number of moves on the cheapest path, if there is one.
    pub fn step_distance(&mut self, start: Point, end: Point) -> Result<Option<usize>, GridError> {
        Ok(self.find_path(start, end)?.map(|path| path.steps()))
    }

    /// Nodes expanded by the most recent query.
    pub fn last_expanded(&self) -> usize {
        self.search.expanded()
    }
}

impl<T: Topology + std::fmt::Debug> std::fmt::Debug for Pathfinder<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pathfinder")
            .field("grid", &self.grid)
            .field("topology", &self.topology)
            .finish_non_exhaustive()
    }
}
