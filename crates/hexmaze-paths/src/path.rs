use hexmaze_core::{CellId, HexGrid, UNSET_COST};

/// Recover a start-to-end route from the costs left by a finished search.
///
/// Starting at the end cell, each step moves to the first neighbour (in side
/// order) whose cost is exactly one less, until the start (cost 0) is
/// reached. Every cost was assigned as "parent + 1", so such a neighbour
/// always exists on a reached cell. Returns `None` when the grid has no end
/// or the end was never reached.
pub fn trace_path(grid: &HexGrid) -> Option<Vec<CellId>> {
    let end = grid.end()?;
    let mut cost = grid.cell(end).cost();
    if cost == UNSET_COST {
        return None;
    }

    let mut path = vec![end];
    let mut cur = end;
    while cost > 0 {
        cur = grid
            .cell(cur)
            .neighbors()
            .iter()
            .flatten()
            .copied()
            .find(|&n| {
                let c = grid.cell(n);
                !c.is_wall() && c.cost() == cost - 1
            })?;
        cost -= 1;
        path.push(cur);
    }

    path.reverse();
    Some(path)
}

/// Mark the interior cells of `path` as backtrack cells for display.
///
/// The first and last cells keep their processed start/end state. Meant to
/// be called once a run has finished.
pub fn mark_backtrack(grid: &mut HexGrid, path: &[CellId]) {
    if path.len() < 3 {
        return;
    }
    for &id in &path[1..path.len() - 1] {
        grid.cell_mut(id).mark_backtrack();
    }
}
