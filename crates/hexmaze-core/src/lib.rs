//! **hexmaze-core** — hexagonal maze graph model (core types).
//!
//! This crate provides the foundational types used across the *hexmaze*
//! workspace: layout geometry, the six-sided [`Cell`] with its symbolic
//! [`CellKind`] state, and the [`HexGrid`] arena that owns every cell and
//! hands out stable [`CellId`] handles for neighbour links.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellKind, InvalidNeighborIndex, Side, UNSET_COST};
pub use geom::{Point, ROW_SPACING, TILE_SIZE};
pub use grid::{CellId, HexGrid};
