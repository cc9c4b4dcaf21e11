use std::collections::VecDeque;

use hexmaze_core::{CellId, HexGrid};

/// Sentinel value meaning "unreachable" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Compute the number of edges from `from` to every cell, walking only
/// through non-wall cells.
///
/// The result is indexed by [`CellId::index`]. Walls and cells that cannot
/// be reached hold [`UNREACHABLE`]. Cell state is not read or changed apart
/// from the wall check, so this can run before or after a search.
pub fn distance_map(grid: &HexGrid, from: CellId) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; grid.len()];
    if grid.get(from).is_none_or(|c| c.is_wall()) {
        return dist;
    }

    let mut queue: VecDeque<CellId> = VecDeque::new();
    dist[from.index()] = 0;
    queue.push_back(from);

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci.index()];
        for &n in grid.cell(ci).neighbors().iter().flatten() {
            if dist[n.index()] != UNREACHABLE || grid.cell(n).is_wall() {
                continue;
            }
            dist[n.index()] = current_dist + 1;
            queue.push_back(n);
        }
    }

    dist
}

/// Edge count of a shortest route from the start to the end, or `None` when
/// either is missing or the end cannot be reached.
pub fn shortest_distance(grid: &HexGrid) -> Option<i32> {
    let start = grid.start()?;
    let end = grid.end()?;
    let d = distance_map(grid, start)[end.index()];
    (d != UNREACHABLE).then_some(d)
}
