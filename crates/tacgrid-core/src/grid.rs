//! The [`Grid`] type: a fixed-size 2D array of owned cell payloads placed
//! in world space.
//!
//! Every cell is created eagerly by a caller-supplied factory and lives for
//! as long as the grid. Lookups hand out references, so callers mutate cells
//! in place. Listeners registered with [`Grid::on_cell_changed`] are told
//! about cells that were changed through [`Grid::update`] or flagged with
//! [`Grid::notify_changed`].

use std::fmt;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::geom::{Point, Range, WorldPos};

/// How cells are placed in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Layout {
    /// Plain rows and columns.
    #[default]
    Square,
    /// Offset hexagon rows: odd rows are pushed right by half a cell.
    HexOddRow,
}

/// Handle returned by [`Grid::on_cell_changed`], used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(Point) + Send>;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A `width × height` grid of `T`, one value per cell, stored row-major.
pub struct Grid<T> {
    cells: Vec<T>,
    bounds: Range,
    cell_size: f32,
    origin: WorldPos,
    layout: Layout,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl<T> Grid<T> {
    /// Create a square-layout grid, calling `factory` once per cell in
    /// row-major order.
    pub fn new(
        width: i32,
        height: i32,
        cell_size: f32,
        origin: WorldPos,
        factory: impl FnMut(Point) -> T,
    ) -> Result<Self, GridError> {
        Self::from_config(GridConfig::new(width, height, cell_size).with_origin(origin), factory)
    }

    /// Create a grid from a validated [`GridConfig`].
    pub fn from_config(
        config: GridConfig,
        mut factory: impl FnMut(Point) -> T,
    ) -> Result<Self, GridError> {
        let len = config.cell_count()?;
        let bounds = Range::sized(config.width, config.height);
        let mut cells = Vec::with_capacity(len);
        cells.extend(bounds.iter().map(&mut factory));
        Ok(Self {
            cells,
            bounds,
            cell_size: config.cell_size,
            origin: config.origin,
            layout: config.layout,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> GridConfig {
        GridConfig {
            width: self.width(),
            height: self.height(),
            cell_size: self.cell_size,
            origin: self.origin,
            layout: self.layout,
        }
    }

    /// The range `[0, width) × [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    #[inline]
    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    #[inline]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Whether `p` names a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat row-major index of `p`, or `None` outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width() as usize + p.x as usize)
    }

    /// Inverse of [`index`](Grid::index). `idx` must be below [`len`](Grid::len).
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width() as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// Borrow the cell at `p`.
    pub fn get(&self, p: Point) -> Result<&T, GridError> {
        match self.index(p) {
            Some(i) => Ok(&self.cells[i]),
            None => Err(GridError::OutOfBounds(p)),
        }
    }

    /// Mutably borrow the cell at `p`. Listeners are not notified; use
    /// [`update`](Grid::update) for changes others should hear about.
    pub fn get_mut(&mut self, p: Point) -> Result<&mut T, GridError> {
        match self.index(p) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::OutOfBounds(p)),
        }
    }

    /// Mutate the cell at `p` with `f`, then notify listeners.
    pub fn update<R>(&mut self, p: Point, f: impl FnOnce(&mut T) -> R) -> Result<R, GridError> {
        let r = f(self.get_mut(p)?);
        self.notify_changed(p);
        Ok(r)
    }

    /// Row-major iterator over `(point, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.bounds.iter().zip(self.cells.iter())
    }

    /// Row-major iterator over `(point, cell)` pairs with mutable cells.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Point, &mut T)> {
        self.bounds.iter().zip(self.cells.iter_mut())
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// All cells in row-major order, mutably. Listeners are not notified.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }

    // -----------------------------------------------------------------------
    // World mapping
    // -----------------------------------------------------------------------

    /// Cell containing `pos`. Not clamped: the result may lie outside the
    /// grid, check it with [`contains`](Grid::contains) or [`get`](Grid::get).
    ///
    /// A NaN coordinate maps to 0 and an infinite one to `i32::MIN` or
    /// `i32::MAX`. Use [`locate`](Grid::locate) to reject such positions.
    pub fn world_to_cell(&self, pos: WorldPos) -> Point {
        let rel = pos - self.origin;
        let y = (rel.y / self.cell_size).floor() as i32;
        let shift = self.row_shift(y);
        let x = (rel.x / self.cell_size - shift).floor() as i32;
        Point::new(x, y)
    }

    /// Cell containing `pos`, which must be finite and inside the grid.
    pub fn locate(&self, pos: WorldPos) -> Result<Point, GridError> {
        if !pos.is_finite() {
            return Err(GridError::InvalidPosition(pos));
        }
        let p = self.world_to_cell(pos);
        if !self.contains(p) {
            return Err(GridError::OutOfBounds(p));
        }
        Ok(p)
    }

    /// World position of the cell's anchor: its lower corner, moved half a
    /// cell along x on odd rows of a hex layout.
    pub fn cell_to_world(&self, p: Point) -> WorldPos {
        let x = p.x as f32 + self.row_shift(p.y);
        self.origin + WorldPos::new(x, p.y as f32) * self.cell_size
    }

    /// World position of the visual center of the cell.
    pub fn cell_center(&self, p: Point) -> WorldPos {
        let half = self.cell_size * 0.5;
        self.cell_to_world(p) + WorldPos::new(half, half)
    }

    /// Horizontal offset of row `y`, in cells.
    #[inline]
    fn row_shift(&self, y: i32) -> f32 {
        match self.layout {
            Layout::HexOddRow if y.rem_euclid(2) == 1 => 0.5,
            _ => 0.0,
        }
    }

    // -----------------------------------------------------------------------
    // Change notification
    // -----------------------------------------------------------------------

    /// Register a listener called with the coordinate of every changed cell.
    pub fn on_cell_changed(&mut self, listener: impl FnMut(Point) + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Tell every listener that the cell at `p` changed.
    pub fn notify_changed(&mut self, p: Point) {
        log::trace!("cell {p} changed, {} listener(s)", self.listeners.len());
        for (_, listener) in self.listeners.iter_mut() {
            listener(p);
        }
    }
}

impl<T> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("bounds", &self.bounds)
            .field("cell_size", &self.cell_size)
            .field("origin", &self.origin)
            .field("layout", &self.layout)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
