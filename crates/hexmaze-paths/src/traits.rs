use hexmaze_core::{CellId, HexGrid};

/// Inspection hooks called synchronously by the search loop.
///
/// Observers only get shared access to the grid, so they can read cell
/// state between iterations but never change it. All methods default to
/// doing nothing.
pub trait SearchObserver {
    /// A cell was taken off the frontier and is about to be expanded.
    fn on_pop(&mut self, _grid: &HexGrid, _cell: CellId) {}

    /// A neighbour was discovered and queued with the given priority.
    fn on_enqueue(&mut self, _grid: &HexGrid, _cell: CellId, _priority: f64) {}

    /// The run ended, successfully or not.
    fn on_finish(&mut self, _grid: &HexGrid) {}
}

impl SearchObserver for () {}
