//! Text presentation: cell glyphs, maze snapshots and the run report.

use std::fmt::Write;

use hexmaze_core::{CellId, CellKind, HexGrid};
use hexmaze_paths::SearchReport;

/// Glyph for each cell state.
pub fn glyph(kind: CellKind) -> char {
    match kind {
        CellKind::Wall => '#',
        CellKind::Start => 'S',
        CellKind::End => 'E',
        CellKind::Unvisited => '.',
        CellKind::Frontier => 'o',
        CellKind::EndProcessed => '*',
        CellKind::StartProcessed => 's',
        CellKind::Dequeued => ',',
        CellKind::Backtrack => '+',
        CellKind::Current => '@',
    }
}

/// Draw a row-major grid of `width` cells per row, odd rows indented.
pub fn snapshot(grid: &HexGrid, width: usize) -> String {
    let mut out = String::with_capacity(grid.len() * 2 + grid.len() / width.max(1));
    if width == 0 {
        return out;
    }
    for i in 0..grid.len() {
        let (col, row) = (i % width, i / width);
        if col == 0 {
            if row > 0 {
                out.push('\n');
            }
            if row % 2 == 1 {
                out.push(' ');
            }
        } else {
            out.push(' ');
        }
        out.push(glyph(grid.cell(CellId(i)).kind()));
    }
    out
}

/// Plain-text report.
pub fn report_text(report: &SearchReport) -> String {
    let mut out = String::new();
    if report.found {
        out.push_str("The end was found\n");
    } else {
        out.push_str("The end was not found\n");
    }
    let length = report
        .path_length
        .map_or_else(String::new, |n| n.to_string());
    let _ = writeln!(out, "Number of steps to get to finish: {length}");
    let _ = writeln!(out, "Hexagons in priority queue: {}", report.in_queue);
    let _ = write!(out, "Total number of steps taken: {}", report.steps);
    out
}
