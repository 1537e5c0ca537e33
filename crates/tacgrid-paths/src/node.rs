use std::fmt;

use tacgrid_core::Point;

/// `g` cost of a node the current search has not reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Opaque handle for whatever stands on a cell (a unit, a marker, ...).
/// The search never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupantId(pub u64);

/// One cell of a pathfinding grid.
///
/// Holds the cell's walkability and occupant plus the scratch state of the
/// most recent search: `g` (cost from the start), `h` (estimate to the
/// goal), `f = g + h` and the predecessor on the best known route. The
/// scratch state is reset before every search.
///
/// Nodes only exist inside a grid, so they serialize (for inspection) but
/// cannot be deserialized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PathNode {
    pos: Point,
    walkable: bool,
    occupant: Option<OccupantId>,
    pub(crate) g: i32,
    pub(crate) h: i32,
    pub(crate) f: i32,
    pub(crate) came_from: Option<Point>,
}

impl PathNode {
    /// A walkable, unoccupied node at `pos`.
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            walkable: true,
            occupant: None,
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            came_from: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn x(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    /// Cost from the start of the last search, [`UNREACHABLE`] if the search
    /// never got here.
    #[inline]
    pub fn g_cost(&self) -> i32 {
        self.g
    }

    #[inline]
    pub fn h_cost(&self) -> i32 {
        self.h
    }

    #[inline]
    pub fn f_cost(&self) -> i32 {
        self.f
    }

    /// Predecessor on the best route the last search found.
    #[inline]
    pub fn came_from(&self) -> Option<Point> {
        self.came_from
    }

    #[inline]
    pub fn occupant(&self) -> Option<OccupantId> {
        self.occupant
    }

    #[inline]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// Replace the occupant, returning the previous one.
    pub fn set_occupant(&mut self, occupant: Option<OccupantId>) -> Option<OccupantId> {
        std::mem::replace(&mut self.occupant, occupant)
    }

    /// Only the pathfinder flips walkability, so that listeners hear about it.
    pub(crate) fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
    }

    #[inline]
    pub(crate) fn calculate_f_cost(&mut self) {
        self.f = self.g.saturating_add(self.h);
    }

    pub(crate) fn reset_for_search(&mut self) {
        self.g = UNREACHABLE;
        self.h = 0;
        self.calculate_f_cost();
        self.came_from = None;
    }
}

impl fmt::Display for PathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.pos.x, self.pos.y)
    }
}
