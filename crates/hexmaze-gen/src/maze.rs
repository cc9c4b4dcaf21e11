//! Hexagonal mazes described as text.
//!
//! Each line is one row of hexagons. Odd rows sit half a tile to the right
//! of even rows; blanks are ignored so the text can be indented to show
//! this:
//!
//! ```text
//! S . . #
//!  # . . .
//! . . # E
//! ```
//!
//! `#` is a wall, `.` an open cell, `S` the start and `E` the end.

use std::fmt;

use hexmaze_core::{CellId, CellKind, HexGrid, Point, Side};
use log::debug;

/// A parsed maze: a rectangle of cell kinds in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<CellKind>,
    width: usize,
    height: usize,
}

impl Maze {
    /// Parse a maze from text.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        let mut start = None;
        let mut end = None;

        for (row, line) in s.lines().enumerate() {
            let mut col = 0;
            for ch in line.chars() {
                let kind = match ch {
                    ' ' | '\t' | '\r' => continue,
                    '#' => CellKind::Wall,
                    '.' => CellKind::Unvisited,
                    'S' => CellKind::Start,
                    'E' => CellKind::End,
                    _ => return Err(MazeError::UnknownCharacter { ch, row, col }),
                };
                match kind {
                    CellKind::Start if start.is_some() => {
                        return Err(MazeError::DuplicateStart { row, col });
                    }
                    CellKind::End if end.is_some() => {
                        return Err(MazeError::DuplicateEnd { row, col });
                    }
                    CellKind::Start => start = Some((row, col)),
                    CellKind::End => end = Some((row, col)),
                    _ => {}
                }
                cells.push(kind);
                col += 1;
            }

            match width {
                None => width = Some(col),
                Some(w) if w != col => {
                    return Err(MazeError::InconsistentSize {
                        row,
                        expected: w,
                        found: col,
                    });
                }
                Some(_) => {}
            }
            height += 1;
        }

        if start.is_none() {
            return Err(MazeError::MissingStart);
        }
        let width = width.unwrap_or(0);
        debug!("parsed maze {width}x{height}, end present: {}", end.is_some());
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Build a maze from row-major cell kinds. `cells.len()` must equal
    /// `width * height`.
    pub(crate) fn from_cells(cells: Vec<CellKind>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Number of cells per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Kind of the cell at `(col, row)`, or `None` outside the maze.
    pub fn cell_at(&self, col: usize, row: usize) -> Option<CellKind> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    /// Build a linked [`HexGrid`].
    ///
    /// Cell ids follow row-major order, so the cell at `(col, row)` gets
    /// `CellId(row * width + col)`. Walls are linked like any other cell.
    pub fn to_grid(&self) -> HexGrid {
        let mut grid = HexGrid::new();
        for (i, &kind) in self.cells.iter().enumerate() {
            let (col, row) = (i % self.width, i / self.width);
            grid.push(kind, Point::hex_layout(col as i32, row as i32));
        }

        // Every edge is reached exactly once from one of its endpoints.
        for row in 0..self.height {
            for col in 0..self.width {
                for side in [Side::Right, Side::LowerRight, Side::LowerLeft] {
                    if let Some(other) = self.id_across(col, row, side) {
                        grid.link(CellId(row * self.width + col), side, other);
                    }
                }
            }
        }
        grid
    }

    fn id_across(&self, col: usize, row: usize, side: Side) -> Option<CellId> {
        let (c, r) = side.step(col as i32, row as i32);
        let c = usize::try_from(c).ok()?;
        let r = usize::try_from(r).ok()?;
        (c < self.width && r < self.height).then(|| CellId(r * self.width + c))
    }
}

impl fmt::Display for Maze {
    /// Writes the maze back as text, odd rows indented by one blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            if row % 2 == 1 {
                f.write_str(" ")?;
            }
            for col in 0..self.width {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let ch = match self.cells[row * self.width + col] {
                    CellKind::Wall => '#',
                    CellKind::Start => 'S',
                    CellKind::End => 'E',
                    _ => '.',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The text has no cells.
    Empty,
    /// A row has a different number of cells than the first row.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not part of the maze alphabet.
    UnknownCharacter { ch: char, row: usize, col: usize },
    /// No `S` cell.
    MissingStart,
    /// A second `S` cell.
    DuplicateStart { row: usize, col: usize },
    /// A second `E` cell.
    DuplicateEnd { row: usize, col: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("maze: no cells"),
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "maze: row {row} has {found} cells, expected {expected}"
            ),
            Self::UnknownCharacter { ch, row, col } => {
                write!(
                    f,
                    "maze contains unknown character \u{201c}{ch}\u{201d} at ({col}, {row})"
                )
            }
            Self::MissingStart => f.write_str("maze: no start cell"),
            Self::DuplicateStart { row, col } => {
                write!(f, "maze: second start cell at ({col}, {row})")
            }
            Self::DuplicateEnd { row, col } => {
                write!(f, "maze: second end cell at ({col}, {row})")
            }
        }
    }
}

impl std::error::Error for MazeError {}
