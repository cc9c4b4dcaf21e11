//! The [`Cell`] type — one hexagon of the maze with its symbolic state.
//!
//! Sides of a pointed-top hexagon are numbered clockwise starting at the
//! upper-right edge:
//!
//! ```text
//!    5 /  \ 0
//!    4 |  | 1
//!    3 \  / 2
//! ```

use std::fmt;

use crate::geom::{Point, TILE_SIZE};
use crate::grid::CellId;

/// Cost value of a cell the search has not reached yet.
pub const UNSET_COST: i32 = -1;

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// One of the six sides of a hexagon.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    UpperRight = 0,
    Right = 1,
    LowerRight = 2,
    LowerLeft = 3,
    Left = 4,
    UpperLeft = 5,
}

impl Side {
    /// All sides in index order 0..=5.
    pub const ALL: [Side; 6] = [
        Side::UpperRight,
        Side::Right,
        Side::LowerRight,
        Side::LowerLeft,
        Side::Left,
        Side::UpperLeft,
    ];

    /// Neighbour slot index of this side.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side for a neighbour slot index.
    pub fn from_index(index: usize) -> Result<Side, InvalidNeighborIndex> {
        Side::ALL
            .get(index)
            .copied()
            .ok_or(InvalidNeighborIndex { index })
    }

    /// The side facing this one on the neighbouring hexagon.
    #[inline]
    pub const fn opposite(self) -> Side {
        Side::ALL[(self as usize + 3) % 6]
    }

    /// Column/row of the neighbour across this side of the hexagon at
    /// `(col, row)`, with odd rows shifted right by half a tile.
    pub const fn step(self, col: i32, row: i32) -> (i32, i32) {
        let odd = row % 2 != 0;
        match self {
            Side::UpperRight if odd => (col + 1, row - 1),
            Side::UpperRight => (col, row - 1),
            Side::Right => (col + 1, row),
            Side::LowerRight if odd => (col + 1, row + 1),
            Side::LowerRight => (col, row + 1),
            Side::LowerLeft if odd => (col, row + 1),
            Side::LowerLeft => (col - 1, row + 1),
            Side::Left => (col - 1, row),
            Side::UpperLeft if odd => (col, row - 1),
            Side::UpperLeft => (col - 1, row - 1),
        }
    }
}

// ---------------------------------------------------------------------------
// CellKind
// ---------------------------------------------------------------------------

/// Symbolic state of a cell. Rendering is left to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Wall,
    Start,
    End,
    Unvisited,
    /// Discovered and waiting in the frontier.
    Frontier,
    EndProcessed,
    StartProcessed,
    /// Fully expanded.
    Dequeued,
    Backtrack,
    /// Being expanded right now.
    Current,
}

// ---------------------------------------------------------------------------
// InvalidNeighborIndex
// ---------------------------------------------------------------------------

/// A neighbour slot index outside `0..=5`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidNeighborIndex {
    pub index: usize,
}

impl fmt::Display for InvalidNeighborIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid index for hexagon neighbor: {}, must be 0-5 inclusive",
            self.index
        )
    }
}

impl std::error::Error for InvalidNeighborIndex {}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A hexagon of the maze.
///
/// Start/end status is fixed when the cell is created; [`kind`](Cell::kind)
/// changes as the search progresses.
#[derive(Clone, Debug)]
pub struct Cell {
    kind: CellKind,
    is_start: bool,
    is_end: bool,
    neighbors: [Option<CellId>; 6],
    cost: i32,
    pos: Point,
}

impl Cell {
    /// Create an unlinked cell of the given kind at a layout position.
    pub fn new(kind: CellKind, pos: Point) -> Self {
        Self {
            kind,
            is_start: kind == CellKind::Start,
            is_end: kind == CellKind::End,
            neighbors: [None; 6],
            cost: UNSET_COST,
            pos,
        }
    }

    /// Current state.
    #[inline]
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// Layout position in pixels.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Neighbour across side `i`, or `None` at the maze boundary.
    pub fn neighbor(&self, i: usize) -> Result<Option<CellId>, InvalidNeighborIndex> {
        Ok(self.neighbors[Side::from_index(i)?.index()])
    }

    /// Overwrite the neighbour slot `i`.
    pub fn set_neighbor(
        &mut self,
        i: usize,
        cell: Option<CellId>,
    ) -> Result<(), InvalidNeighborIndex> {
        self.set_side(Side::from_index(i)?, cell);
        Ok(())
    }

    #[inline]
    pub(crate) fn set_side(&mut self, side: Side, cell: Option<CellId>) {
        self.neighbors[side.index()] = cell;
    }

    /// All six neighbour slots in side order.
    #[inline]
    pub fn neighbors(&self) -> &[Option<CellId>; 6] {
        &self.neighbors
    }

    /// Straight-line distance to `end` in tile units; `0.0` when there is no
    /// end.
    pub fn heuristic_distance_to(&self, end: Option<&Cell>) -> f64 {
        let Some(end) = end else {
            return 0.0;
        };
        self.pos.euclidean(end.pos) / f64::from(TILE_SIZE)
    }

    // --- predicates ---

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.kind == CellKind::Wall
    }

    /// Whether the cell currently counts as being in the frontier. The
    /// processed start cell stays a member for the whole run.
    #[inline]
    pub fn is_frontier_member(&self) -> bool {
        matches!(self.kind, CellKind::Frontier | CellKind::StartProcessed)
    }

    #[inline]
    pub fn is_dequeued(&self) -> bool {
        self.kind == CellKind::Dequeued
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.is_end
    }

    // --- state transitions ---

    pub fn mark_frontier(&mut self) {
        self.kind = CellKind::Frontier;
    }

    pub fn mark_dequeued(&mut self) {
        self.kind = CellKind::Dequeued;
    }

    pub fn mark_end_processed(&mut self) {
        self.kind = CellKind::EndProcessed;
    }

    pub fn mark_start_processed(&mut self) {
        self.kind = CellKind::StartProcessed;
    }

    pub fn mark_current(&mut self) {
        self.kind = CellKind::Current;
    }

    pub fn mark_backtrack(&mut self) {
        self.kind = CellKind::Backtrack;
    }

    // --- cost ---

    /// Number of steps from the start, or [`UNSET_COST`].
    #[inline]
    pub fn cost(&self) -> i32 {
        self.cost
    }

    #[inline]
    pub fn set_cost(&mut self, cost: i32) {
        self.cost = cost;
    }
}
