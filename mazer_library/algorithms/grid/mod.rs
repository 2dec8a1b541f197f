//! 2D Maze Occupancy Grid
//!
//! Wall/open cell map with the border-is-wall convention: the outer ring of
//! cells is never passable, whatever is stored there.
//!
//! # Example
//!
//! ```rust
//! use mazer_library::algorithms::grid::{Cell, Grid};
//! use mazer_core::Location;
//!
//! let mut grid = Grid::new(5, 5); // all walls
//! grid.set(Location::new(2, 2), Cell::Open);
//!
//! assert!(grid.is_passable(Location::new(2, 2)));
//! assert!(!grid.is_passable(Location::new(0, 2))); // border
//! ```

use mazer_core::{Location, MazeError, MazeResult};
use std::fmt;

/// Neighbour count reported for cells on or beyond the border ring.
/// Higher than any real count, so callers treat those cells as fully walled.
pub const BORDER_SENTINEL: u32 = 5;

const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
const DIAGONAL_OFFSETS: [(i32, i32); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Open => '.',
        }
    }
}

/// Maze occupancy grid, `width` cells along x and `depth` cells along z
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    depth: usize,
    cells: Vec<Cell>, // row-major, index = z * width + x
}

impl Grid {
    /// Create a grid with every cell set to `Wall`
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            cells: vec![Cell::Wall; width * depth],
        }
    }

    /// Parse a grid from text rows, `#` for walls and `.` (or space) for open cells.
    /// Row `i` becomes `z = i`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> MazeResult<Self> {
        let depth = rows.len();
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(MazeError::InvalidMaze("maze has no cells".to_string()));
        }

        let mut grid = Grid::new(width, depth);
        for (z, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != width {
                return Err(MazeError::InvalidMaze(format!(
                    "row {} has {} cells, expected {}",
                    z,
                    row.chars().count(),
                    width
                )));
            }
            for (x, symbol) in row.chars().enumerate() {
                let cell = match symbol {
                    '#' => Cell::Wall,
                    '.' | ' ' => Cell::Open,
                    other => {
                        return Err(MazeError::InvalidMaze(format!(
                            "unexpected symbol '{}' at ({}, {})",
                            other, x, z
                        )))
                    }
                };
                grid.cells[z * width + x] = cell;
            }
        }
        Ok(grid)
    }

    /// Render back to text rows, one per z
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width.max(1))
            .map(|row| row.iter().map(|c| c.symbol()).collect())
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of cells, the upper bound on search expansions
    pub fn area(&self) -> usize {
        self.width * self.depth
    }

    fn index(&self, loc: Location) -> Option<usize> {
        if loc.x < 0 || loc.z < 0 {
            return None;
        }
        let (x, z) = (loc.x as usize, loc.z as usize);
        if x >= self.width || z >= self.depth {
            return None;
        }
        Some(z * self.width + x)
    }

    /// Stored cell value, `None` outside the grid
    pub fn get(&self, loc: Location) -> Option<Cell> {
        self.index(loc).map(|i| self.cells[i])
    }

    /// Set a cell. Locations outside the grid are ignored.
    pub fn set(&mut self, loc: Location, cell: Cell) {
        if let Some(i) = self.index(loc) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// True for cells inside `[1, W-2] x [1, D-2]`
    pub fn is_interior(&self, loc: Location) -> bool {
        let (x, z) = (loc.x as i64, loc.z as i64);
        x >= 1 && z >= 1 && x <= self.width as i64 - 2 && z <= self.depth as i64 - 2
    }

    /// Interior cell whose stored value is `Open`
    pub fn is_passable(&self, loc: Location) -> bool {
        self.is_interior(loc) && self.get(loc) == Some(Cell::Open)
    }

    // Caller guarantees `loc` is interior, so every offset stays in bounds.
    fn count_open(&self, loc: Location, offsets: &[(i32, i32)]) -> u32 {
        offsets
            .iter()
            .filter(|(dx, dz)| {
                self.get(Location::new(loc.x + dx, loc.z + dz)) == Some(Cell::Open)
            })
            .count() as u32
    }

    /// Open cells among the N/S/E/W neighbours, or [`BORDER_SENTINEL`] for non-interior cells
    pub fn count_orthogonal_open_neighbors(&self, loc: Location) -> u32 {
        if !self.is_interior(loc) {
            return BORDER_SENTINEL;
        }
        self.count_open(loc, &ORTHOGONAL_OFFSETS)
    }

    /// Open cells among the diagonal neighbours, or [`BORDER_SENTINEL`] for non-interior cells
    pub fn count_diagonal_open_neighbors(&self, loc: Location) -> u32 {
        if !self.is_interior(loc) {
            return BORDER_SENTINEL;
        }
        self.count_open(loc, &DIAGONAL_OFFSETS)
    }

    pub fn count_all_open_neighbors(&self, loc: Location) -> u32 {
        self.count_orthogonal_open_neighbors(loc) + self.count_diagonal_open_neighbors(loc)
    }

    /// Passable cells, walking z then x
    pub fn open_cells(&self) -> Vec<Location> {
        let mut cells = Vec::new();
        for z in 1..self.depth.saturating_sub(1) {
            for x in 1..self.width.saturating_sub(1) {
                let loc = Location::new(x as i32, z as i32);
                if self.get(loc) == Some(Cell::Open) {
                    cells.push(loc);
                }
            }
        }
        cells
    }

    /// World position of a cell centre, with the grid centred on the origin
    pub fn to_world(&self, loc: Location, scale: f64) -> (f64, f64) {
        let offset_x = (self.width as f64 - 1.0) * scale / 2.0;
        let offset_z = (self.depth as f64 - 1.0) * scale / 2.0;
        (
            loc.x as f64 * scale - offset_x,
            loc.z as f64 * scale - offset_z,
        )
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.to_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
