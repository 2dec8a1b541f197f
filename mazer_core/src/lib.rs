//! # MAZER Core
//!
//! Shared building blocks for the MAZER workspace:
//!
//! - **Location / Direction**: integer cell coordinates and the four movement offsets
//! - **Errors**: the [`MazeError`] taxonomy used by the grid and the search engine
//! - **Config**: TOML-backed [`MazeConfig`]
//! - **Logging**: tracing subscriber setup for the binaries
//!
//! ## Quick Start
//!
//! ```rust
//! use mazer_core::{Direction, Location, MazeConfig};
//!
//! let start = Location::new(1, 1);
//! assert_eq!(start + Direction::Right, Location::new(2, 1));
//!
//! let config = MazeConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod location;
pub mod logging;

pub use config::{GeneratorKind, MazeConfig, MAX_CELLS};
pub use error::{MazeError, MazeResult};
pub use location::{Direction, Location};
