//! # MAZER Standard Library
//!
//! Pure algorithms for the MAZER pathfinding workbench.
//!
//! ## Structure
//!
//! ```text
//! mazer_library/
//! ── algorithms/
//!    ── grid/        # Occupancy grid and neighbour queries
//!    ── generator/   # Maze carving and endpoint selection
//!    ── astar/       # Step-driven A* engine, node arena, path walk
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mazer_library::{AStarSearch, Grid, SearchState};
//! use mazer_core::Location;
//!
//! let grid = Grid::from_rows(&["#####", "#...#", "#####"]).unwrap();
//! let mut search = AStarSearch::new();
//! search
//!     .begin_search(&grid, Location::new(1, 1), Location::new(3, 1))
//!     .unwrap();
//! search.run_to_completion(&grid, grid.area()).unwrap();
//!
//! assert_eq!(search.state(), SearchState::Done);
//! assert_eq!(search.reconstruct_path().unwrap().len(), 3);
//! ```

pub mod algorithms;

// Re-export the main types at the crate root for convenience
pub use algorithms::astar::{AStarSearch, Expansion, NodeId, NodeSnapshot, SearchNode, SearchState};
pub use algorithms::generator::{
    build_grid, generator_for, pick_endpoints, Backtracker, MazeGenerator, RandomFill,
};
pub use algorithms::grid::{Cell, Grid, BORDER_SENTINEL};
