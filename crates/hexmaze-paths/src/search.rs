//! Best-first traversal of a hexagonal maze.
//!
//! Cells are expanded by ascending `cost + heuristic`. A cell's cost is fixed
//! the first time it is discovered: neighbours already in the frontier or
//! already expanded are never updated, even if a cheaper route shows up
//! later.

use std::fmt;

use hexmaze_core::{CellId, HexGrid, InvalidNeighborIndex, Side};
use log::{debug, trace};

use crate::frontier::{EmptyFrontier, OrderedFrontier};
use crate::traits::SearchObserver;

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Outcome of a search run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Whether the end cell was reached.
    pub found: bool,
    /// Number of cells on the path, start and end included.
    pub path_length: Option<u32>,
    /// Running tally of queued cells: +1 per enqueue, -1 per pop, starting
    /// from the seeded frontier.
    pub in_queue: i64,
    /// Pops plus ordered enqueues. Seeding the start is not counted.
    pub steps: u64,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that abort a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The grid has no start cell.
    MissingStart,
    /// A neighbour slot outside `0..=5` was accessed.
    InvalidNeighbor(InvalidNeighborIndex),
    /// The frontier was popped while empty.
    EmptyFrontier(EmptyFrontier),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => f.write_str("the maze has no start cell"),
            Self::InvalidNeighbor(e) => e.fmt(f),
            Self::EmptyFrontier(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingStart => None,
            Self::InvalidNeighbor(e) => Some(e),
            Self::EmptyFrontier(e) => Some(e),
        }
    }
}

impl From<InvalidNeighborIndex> for SearchError {
    fn from(e: InvalidNeighborIndex) -> Self {
        Self::InvalidNeighbor(e)
    }
}

impl From<EmptyFrontier> for SearchError {
    fn from(e: EmptyFrontier) -> Self {
        Self::EmptyFrontier(e)
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Drives one best-first run over a grid it holds exclusively.
pub struct SearchEngine<'g> {
    grid: &'g mut HexGrid,
    frontier: OrderedFrontier<CellId>,
    steps: u64,
    in_queue: i64,
}

impl<'g> SearchEngine<'g> {
    /// Create an engine for `grid`. Nothing happens until [`run`](Self::run).
    pub fn new(grid: &'g mut HexGrid) -> Self {
        Self {
            grid,
            frontier: OrderedFrontier::new(),
            steps: 0,
            in_queue: 0,
        }
    }

    /// Run the search to completion.
    pub fn run(&mut self) -> Result<SearchReport, SearchError> {
        self.run_with(&mut ())
    }

    /// Run the search to completion, calling `observer` after each pop and
    /// each enqueue.
    pub fn run_with<O: SearchObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<SearchReport, SearchError> {
        let start = self.grid.start().ok_or(SearchError::MissingStart)?;
        let end = self.grid.end();
        debug!(
            "search: {} cells, start {start}, end {}",
            self.grid.len(),
            end.map_or_else(|| "none".to_string(), |e| e.to_string())
        );

        self.frontier.clear();
        self.steps = 0;

        {
            let cell = self.grid.cell_mut(start);
            cell.set_cost(0);
            cell.mark_start_processed();
        }
        self.frontier.push_back(start);
        self.in_queue = self.frontier.len() as i64;

        let mut reached = None;
        while !self.frontier.is_empty() {
            let current = self.frontier.pop_front()?;
            self.grid.cell_mut(current).mark_current();
            self.steps += 1;
            self.in_queue -= 1;
            trace!("pop {current} (cost {})", self.grid.cell(current).cost());
            observer.on_pop(&*self.grid, current);

            if self.grid.cell(current).is_start() {
                self.grid.cell_mut(current).mark_start_processed();
            }

            if self.grid.cell(current).is_end() {
                let cell = self.grid.cell_mut(current);
                cell.mark_current();
                cell.mark_end_processed();
                reached = Some(current);
                break;
            }

            self.expand(current, observer)?;

            if !self.grid.cell(current).is_start() {
                self.grid.cell_mut(current).mark_dequeued();
            }
        }

        let report = SearchReport {
            found: reached.is_some(),
            path_length: reached.map(|e| self.path_length(e)),
            in_queue: self.in_queue,
            steps: self.steps,
        };
        debug!(
            "search finished: found={} length={:?} in_queue={} steps={}",
            report.found, report.path_length, report.in_queue, report.steps
        );
        observer.on_finish(&*self.grid);
        Ok(report)
    }

    /// Queue every undiscovered, passable neighbour of `current`.
    fn expand<O: SearchObserver>(
        &mut self,
        current: CellId,
        observer: &mut O,
    ) -> Result<(), SearchError> {
        let base = self.grid.cell(current).cost();
        for side in Side::ALL {
            let Some(n) = self.grid.cell(current).neighbor(side.index())? else {
                continue;
            };
            let cell = self.grid.cell(n);
            if cell.is_wall() || cell.is_dequeued() || cell.is_frontier_member() {
                continue;
            }

            self.grid.cell_mut(n).set_cost(base + 1);
            let priority = self.grid.heuristic(n) + f64::from(base + 1);
            self.frontier.push_ordered(n, priority);
            self.grid.cell_mut(n).mark_frontier();
            self.steps += 1;
            self.in_queue += 1;
            trace!("enqueue {n} via {side:?} at {priority:.3}");
            observer.on_enqueue(&*self.grid, n, priority);
        }
        Ok(())
    }

    fn path_length(&self, end: CellId) -> u32 {
        u32::try_from(self.grid.cell(end).cost() + 1).unwrap_or(0)
    }
}

/// Run a search over `grid` without an observer.
pub fn solve(grid: &mut HexGrid) -> Result<SearchReport, SearchError> {
    SearchEngine::new(grid).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexmaze_core::{CellKind, Point};

    /// Cells laid out on one row and linked left to right.
    fn line(kinds: &[CellKind]) -> (HexGrid, Vec<CellId>) {
        let mut g = HexGrid::new();
        let ids: Vec<CellId> = kinds
            .iter()
            .enumerate()
            .map(|(col, &k)| g.push(k, Point::hex_layout(col as i32, 0)))
            .collect();
        for pair in ids.windows(2) {
            g.link(pair[0], Side::Right, pair[1]);
        }
        (g, ids)
    }

    #[test]
    fn three_cell_line() {
        let (mut g, ids) = line(&[CellKind::Start, CellKind::Unvisited, CellKind::End]);
        let report = solve(&mut g).unwrap();
        assert_eq!(
            report,
            SearchReport {
                found: true,
                path_length: Some(3),
                in_queue: 0,
                steps: 5,
            }
        );
        assert_eq!(g.cell(ids[0]).kind(), CellKind::StartProcessed);
        assert_eq!(g.cell(ids[1]).kind(), CellKind::Dequeued);
        assert_eq!(g.cell(ids[2]).kind(), CellKind::EndProcessed);
        assert_eq!(g.cell(ids[2]).cost(), 2);
    }

    #[test]
    fn isolated_start() {
        let mut g = HexGrid::new();
        let s = g.push(CellKind::Start, Point::hex_layout(1, 1));
        for side in Side::ALL.into_iter().step_by(2) {
            let (c, r) = side.step(1, 1);
            let w = g.push(CellKind::Wall, Point::hex_layout(c, r));
            g.link(s, side, w);
        }
        g.push(CellKind::End, Point::hex_layout(5, 5));

        let report = solve(&mut g).unwrap();
        assert!(!report.found);
        assert_eq!(report.path_length, None);
        assert_eq!(report.steps, 1);
        assert_eq!(report.in_queue, 0);
        assert_eq!(g.cell(s).kind(), CellKind::StartProcessed);
    }

    #[test]
    fn end_enclosed_by_walls() {
        let (mut g, ids) = line(&[
            CellKind::Start,
            CellKind::Unvisited,
            CellKind::Wall,
            CellKind::End,
        ]);
        let report = solve(&mut g).unwrap();
        assert!(!report.found);
        assert_eq!(report.path_length, None);
        assert_eq!(report.in_queue, 0);
        // pop S, push A, pop A
        assert_eq!(report.steps, 3);
        assert_eq!(g.cell(ids[3]).kind(), CellKind::End);
        assert_eq!(g.cell(ids[3]).cost(), hexmaze_core::UNSET_COST);
    }

    #[test]
    fn lone_start_without_end() {
        let mut g = HexGrid::new();
        let s = g.push(CellKind::Start, Point::ZERO);
        let report = solve(&mut g).unwrap();
        // No end cell at all: the start is expanded and the run exhausts.
        assert!(!report.found);
        assert_eq!(report.steps, 1);
        assert_eq!(g.cell(s).kind(), CellKind::StartProcessed);
    }

    #[test]
    fn missing_start_is_an_error() {
        let mut g = HexGrid::new();
        g.push(CellKind::End, Point::ZERO);
        assert_eq!(solve(&mut g), Err(SearchError::MissingStart));
    }

    #[test]
    fn no_end_explores_everything_reachable() {
        let (mut g, ids) = line(&[
            CellKind::Start,
            CellKind::Unvisited,
            CellKind::Unvisited,
            CellKind::Unvisited,
        ]);
        let report = solve(&mut g).unwrap();
        assert!(!report.found);
        assert_eq!(report.steps, 7);
        for id in &ids[1..] {
            assert!(g.cell(*id).is_dequeued());
        }
        assert_eq!(g.cell(ids[3]).cost(), 3);
    }

    #[test]
    fn dequeued_cells_are_never_requeued() {
        // S, A and B all touch each other.
        let mut g = HexGrid::new();
        let s = g.push(CellKind::Start, Point::hex_layout(0, 0));
        let a = g.push(CellKind::Unvisited, Point::hex_layout(1, 0));
        let b = g.push(CellKind::Unvisited, Point::hex_layout(0, 1));
        g.link(s, Side::Right, a);
        g.link(s, Side::LowerRight, b);
        g.link(a, Side::LowerLeft, b);

        #[derive(Default)]
        struct Count(Vec<CellId>);
        impl SearchObserver for Count {
            fn on_enqueue(&mut self, _: &HexGrid, cell: CellId, _: f64) {
                self.0.push(cell);
            }
        }

        let mut seen = Count::default();
        let report = SearchEngine::new(&mut g).run_with(&mut seen).unwrap();
        assert!(!report.found);
        assert_eq!(seen.0, vec![a, b]);
        assert!(g.cell(a).is_dequeued());
        assert!(g.cell(b).is_dequeued());
    }

    #[test]
    fn straight_row_in_open_field() {
        // Three rows, start and end on the middle row four steps apart.
        let mut g = HexGrid::new();
        let mut ids = vec![vec![CellId(0); 5]; 3];
        for (row, row_ids) in ids.iter_mut().enumerate() {
            for (col, id) in row_ids.iter_mut().enumerate() {
                let kind = match (row, col) {
                    (1, 0) => CellKind::Start,
                    (1, 4) => CellKind::End,
                    _ => CellKind::Unvisited,
                };
                *id = g.push(kind, Point::hex_layout(col as i32, row as i32));
            }
        }
        for row in 0..3i32 {
            for col in 0..5i32 {
                for side in [Side::Right, Side::LowerRight, Side::LowerLeft] {
                    let (c, r) = side.step(col, row);
                    if (0..5).contains(&c) && (0..3).contains(&r) {
                        g.link(
                            ids[row as usize][col as usize],
                            side,
                            ids[r as usize][c as usize],
                        );
                    }
                }
            }
        }

        let report = solve(&mut g).unwrap();
        assert!(report.found);
        assert_eq!(report.path_length, Some(5));
        for col in 1..4 {
            assert!(g.cell(ids[1][col]).is_dequeued());
        }
    }

    #[test]
    fn observer_sees_every_pop() {
        let (mut g, ids) = line(&[CellKind::Start, CellKind::Unvisited, CellKind::End]);

        #[derive(Default)]
        struct Trace {
            pops: Vec<(CellId, CellKind)>,
            finished: bool,
        }
        impl SearchObserver for Trace {
            fn on_pop(&mut self, grid: &HexGrid, cell: CellId) {
                self.pops.push((cell, grid.cell(cell).kind()));
            }
            fn on_finish(&mut self, _: &HexGrid) {
                self.finished = true;
            }
        }

        let mut t = Trace::default();
        SearchEngine::new(&mut g).run_with(&mut t).unwrap();
        assert!(t.finished);
        assert_eq!(
            t.pops,
            vec![
                (ids[0], CellKind::Current),
                (ids[1], CellKind::Current),
                (ids[2], CellKind::Current),
            ]
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SearchError::MissingStart.to_string(),
            "the maze has no start cell"
        );
        let e: SearchError = InvalidNeighborIndex { index: 7 }.into();
        assert!(e.to_string().contains('7'));
        let e: SearchError = EmptyFrontier.into();
        assert_eq!(e.to_string(), "the priority queue is empty");
    }
}
