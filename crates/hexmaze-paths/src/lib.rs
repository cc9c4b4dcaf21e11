//! Best-first search over hexagonal mazes.
//!
//! - [`OrderedFrontier`] — a sorted linked priority queue (O(1) pop, O(n)
//!   ordered insert, FIFO among equal priorities).
//! - [`SearchEngine`] — expands cells by ascending `cost + heuristic`,
//!   updating each [`Cell`](hexmaze_core::Cell)'s state as it goes, and
//!   returns a [`SearchReport`].
//! - [`trace_path`] / [`mark_backtrack`] — recover and display the route
//!   after a successful run.
//! - [`distance_map`] — plain BFS edge counts, to compare a best-first result
//!   with the true graph distance.

mod bfs;
mod frontier;
mod path;
mod search;
mod traits;

pub use bfs::{UNREACHABLE, distance_map, shortest_distance};
pub use frontier::{EmptyFrontier, Iter, OrderedFrontier};
pub use path::{mark_backtrack, trace_path};
pub use search::{SearchEngine, SearchError, SearchReport, solve};
pub use traits::SearchObserver;
