//! Random maze generation.
//!
//! Provides two generators:
//! - **Wall scatter**: every cell independently becomes a wall with a given
//!   probability. The end may or may not be reachable.
//! - **Random walk**: starts from a solid block of walls and carves a
//!   drunk-walk tunnel from the start until it hits the end, so the end is
//!   always reachable.
//!
//! In both, the start is the top-left cell and the end the bottom-right one.

use hexmaze_core::{CellKind, Side};
use log::debug;
use rand::Rng;

use crate::maze::Maze;

/// Maze generator driven by a random number generator.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generate a `width` x `height` maze where each cell other than the
    /// start and end is a wall with probability `wall_pct` (clamped to
    /// 0.0–1.0).
    ///
    /// A maze with a single cell has only a start.
    pub fn scatter_walls(&mut self, width: usize, height: usize, wall_pct: f64) -> Maze {
        let p = wall_pct.clamp(0.0, 1.0);
        let cells = (0..width * height)
            .map(|_| {
                if self.rng.random_bool(p) {
                    CellKind::Wall
                } else {
                    CellKind::Unvisited
                }
            })
            .collect();
        let maze = place_endpoints(cells, width, height);
        debug!("scatter_walls {width}x{height} at {p:.2}");
        maze
    }

    /// Generate a `width` x `height` maze by carving a random walk from the
    /// start to the end through solid wall.
    ///
    /// Returns the maze and the number of cells carved (start and end
    /// included).
    pub fn random_walk(&mut self, width: usize, height: usize) -> (Maze, usize) {
        let len = width * height;
        let mut cells = vec![CellKind::Wall; len];
        if len == 0 {
            return (Maze::from_cells(cells, width, height), 0);
        }

        let goal = (width as i32 - 1, height as i32 - 1);
        let mut pos = (0i32, 0i32);
        let mut carved = 1;
        cells[0] = CellKind::Unvisited;
        while pos != goal {
            let side = Side::ALL[self.rng.random_range(0..6usize)];
            let (c, r) = side.step(pos.0, pos.1);
            if c < 0 || r < 0 || c >= width as i32 || r >= height as i32 {
                continue;
            }
            pos = (c, r);
            let idx = r as usize * width + c as usize;
            if cells[idx] == CellKind::Wall {
                cells[idx] = CellKind::Unvisited;
                carved += 1;
            }
        }

        debug!("random_walk {width}x{height} carved {carved} cells");
        (place_endpoints(cells, width, height), carved)
    }
}

fn place_endpoints(mut cells: Vec<CellKind>, width: usize, height: usize) -> Maze {
    if let Some(first) = cells.first_mut() {
        *first = CellKind::Start;
    }
    if cells.len() > 1 {
        if let Some(last) = cells.last_mut() {
            *last = CellKind::End;
        }
    }
    Maze::from_cells(cells, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn scatter_places_endpoints() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(7));
        let m = mg.scatter_walls(6, 4, 0.4);
        assert_eq!(m.width(), 6);
        assert_eq!(m.height(), 4);
        assert_eq!(m.cell_at(0, 0), Some(CellKind::Start));
        assert_eq!(m.cell_at(5, 3), Some(CellKind::End));
        let g = m.to_grid();
        assert!(g.start().is_some());
        assert!(g.end().is_some());
    }

    #[test]
    fn scatter_extremes() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(1));
        let open = mg.scatter_walls(5, 5, 0.0);
        assert_eq!(open.to_grid().count(CellKind::Wall), 0);
        let solid = mg.scatter_walls(5, 5, 2.0);
        assert_eq!(solid.to_grid().count(CellKind::Wall), 23);
    }

    #[test]
    fn single_cell_has_only_a_start() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(3));
        let m = mg.scatter_walls(1, 1, 0.5);
        let g = m.to_grid();
        assert!(g.start().is_some());
        assert!(g.end().is_none());
    }

    #[test]
    fn random_walk_connects_start_and_end() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(42));
        for _ in 0..10 {
            let (m, carved) = mg.random_walk(8, 6);
            let g = m.to_grid();
            assert!(carved >= 2);
            assert_eq!(g.len() - g.count(CellKind::Wall), carved);
            assert_eq!(m.cell_at(0, 0), Some(CellKind::Start));
            assert_eq!(m.cell_at(7, 5), Some(CellKind::End));
        }
    }

    #[test]
    fn output_parses_back() {
        let mut mg = MazeGen::new(StdRng::seed_from_u64(9));
        let m = mg.scatter_walls(7, 3, 0.3);
        assert_eq!(Maze::parse(&m.to_string()).unwrap(), m);
    }
}
