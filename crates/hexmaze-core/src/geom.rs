//! Geometry primitives: [`Point`] and the hexagon layout constants.
//!
//! Cell positions are expressed in pixel units of a pointed-top hexagon
//! layout. Horizontal neighbours are [`TILE_SIZE`] apart; rows are
//! [`ROW_SPACING`] apart and odd rows are shifted right by half a tile.

use std::fmt;

/// Distance in pixels between the centres of two horizontal neighbours.
/// Heuristic distances are expressed in multiples of this unit.
pub const TILE_SIZE: i32 = 25;

/// Vertical distance in pixels between two consecutive rows.
pub const ROW_SPACING: i32 = 21;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Pixel position of the hexagon at `(col, row)` in an odd-row-shifted
    /// layout.
    ///
    /// The half-tile offset is rounded down, which keeps every pair of
    /// neighbours at most [`TILE_SIZE`] pixels apart.
    #[inline]
    pub const fn hex_layout(col: i32, row: i32) -> Self {
        let offset = if row % 2 != 0 { TILE_SIZE / 2 } else { 0 };
        Self::new(col * TILE_SIZE + offset, row * ROW_SPACING)
    }

    /// Straight-line distance to `other`, in pixels.
    #[inline]
    pub fn euclidean(self, other: Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
