//! # MAZER - incremental A* on grid mazes
//!
//! Generate a maze, drop a start and a goal into it and watch A* expand one
//! node per call.
//!
//! ## Quick Start
//!
//! ```rust
//! use mazer::prelude::*;
//!
//! # fn main() -> std::result::Result<(), MazeError> {
//! let config = MazeConfig {
//!     width: 15,
//!     depth: 15,
//!     generator: GeneratorKind::Backtracker,
//!     ..MazeConfig::default()
//! };
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let grid = build_grid(&config, &mut rng);
//! let (start, goal) = pick_endpoints(&grid, &mut rng)?;
//!
//! let mut search = AStarSearch::new();
//! search.begin_search(&grid, start, goal)?;
//! while search.state() == SearchState::Searching {
//!     let step = search.expand_once(&grid)?;
//!     if let Some(closed) = step.closed {
//!         assert!(search.is_closed(closed.location));
//!     }
//! }
//!
//! let path = search.reconstruct_path()?;
//! assert_eq!(path.last(), Some(&start));
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - **Step-driven search** with per-step expansion reports
//! - **Seeded generators** for reproducible mazes
//! - **Border-aware grid** queries that never index out of bounds

// Re-export core components
pub use mazer_core::{self, *};

// Re-export the algorithm library with alias
pub use mazer_library as library;

/// The MAZER prelude - everything you need to get started
pub mod prelude {
    // Coordinates
    pub use mazer_core::{Direction, Location};

    // Configuration
    pub use mazer_core::{GeneratorKind, MazeConfig};

    // Error types
    pub use mazer_core::{MazeError, MazeResult};
    pub type Result<T> = MazeResult<T>;

    // Grid and generation
    pub use mazer_library::{
        build_grid, pick_endpoints, Backtracker, Cell, Grid, MazeGenerator, RandomFill,
    };

    // Search
    pub use mazer_library::algorithms::astar::path_cost;
    pub use mazer_library::{AStarSearch, Expansion, NodeId, SearchNode, SearchState};

    // Seeded randomness
    pub use rand::SeedableRng;
    pub use rand_chacha::ChaCha8Rng;

    // Common traits
    pub use serde::{Deserialize, Serialize};

    // Re-export anyhow for error handling
    pub use anyhow::{anyhow, bail, ensure, Context, Result as AnyResult};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get MAZER version
pub fn version() -> &'static str {
    VERSION
}
