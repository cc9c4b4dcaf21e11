//! Maze utilities for hexmaze: text loading and random generation.

pub mod mapgen;
pub mod maze;

pub use mapgen::MazeGen;
pub use maze::{Maze, MazeError};
