//! The [`HexGrid`] arena — owns every [`Cell`] of a maze.
//!
//! Cells refer to each other through [`CellId`] handles rather than
//! references, so the (cyclic) neighbour graph needs no shared ownership.

use std::fmt;

use crate::cell::{Cell, CellKind, Side};
use crate::geom::Point;

/// Stable handle of a cell inside its [`HexGrid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId(pub usize);

impl CellId {
    /// Position of the cell in the arena.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Arena of hexagon cells plus the designated start and end.
#[derive(Clone, Debug, Default)]
pub struct HexGrid {
    cells: Vec<Cell>,
    start: Option<CellId>,
    end: Option<CellId>,
}

impl HexGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unlinked cell and return its handle.
    ///
    /// A `Start` or `End` cell becomes the grid's start or end; adding a
    /// second one replaces the earlier handle (the earlier cell keeps its
    /// flag).
    pub fn push(&mut self, kind: CellKind, pos: Point) -> CellId {
        let id = CellId(self.cells.len());
        self.cells.push(Cell::new(kind, pos));
        match kind {
            CellKind::Start => self.start = Some(id),
            CellKind::End => self.end = Some(id),
            _ => {}
        }
        id
    }

    /// Link `a` and `b` across `side` of `a` (and the opposite side of `b`).
    ///
    /// # Panics
    ///
    /// Panics if either handle does not belong to this grid.
    pub fn link(&mut self, a: CellId, side: Side, b: CellId) {
        self.cells[a.0].set_side(side, Some(b));
        self.cells[b.0].set_side(side.opposite(), Some(a));
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell for a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this grid.
    #[inline]
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    /// Mutable cell for a handle.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not belong to this grid.
    #[inline]
    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    /// Cell for a handle, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.0)
    }

    /// The start cell, if any.
    #[inline]
    pub fn start(&self) -> Option<CellId> {
        self.start
    }

    /// The end cell, if any.
    #[inline]
    pub fn end(&self) -> Option<CellId> {
        self.end
    }

    /// Heuristic distance from `id` to the end cell (`0.0` without an end).
    pub fn heuristic(&self, id: CellId) -> f64 {
        let end = self.end.map(|e| self.cell(e));
        self.cell(id).heuristic_distance_to(end)
    }

    /// Iterate over `(CellId, &Cell)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter().enumerate().map(|(i, c)| (CellId(i), c))
    }

    /// Count how many cells are currently of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind() == kind).count()
    }
}
