//! Maze configuration
//!
//! Loaded from a TOML file; every field is optional and falls back to the
//! defaults below.
//!
//! ```toml
//! width = 30
//! depth = 30
//! scale = 6.0
//! generator = "random-fill"
//! open_probability = 0.5
//! seed = 42
//! ```

use crate::error::{MazeError, MazeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest grid that still has an interior cell inside the wall ring
pub const MIN_DIMENSION: usize = 3;

/// Largest grid, in cells, a config may ask for
pub const MAX_CELLS: usize = 1 << 24;

/// How the maze interior gets carved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GeneratorKind {
    /// Independent coin flip per cell; may leave the goal unreachable
    #[default]
    RandomFill,
    /// Depth-first backtracker; every interior cell on odd coordinates is connected
    Backtracker,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub width: usize,
    pub depth: usize,
    /// World units per cell, used when converting cells to world positions
    pub scale: f64,
    pub generator: GeneratorKind,
    /// Chance of a cell being open under `RandomFill`
    pub open_probability: f64,
    /// Fixed seed for reproducible mazes and endpoints; entropy when absent
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            width: 30,
            depth: 30,
            scale: 6.0,
            generator: GeneratorKind::RandomFill,
            open_probability: 0.5,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// Load and validate a config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> MazeResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> MazeResult<Self> {
        let config: MazeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> MazeResult<String> {
        toml::to_string(self).map_err(|e| MazeError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> MazeResult<()> {
        if self.width < MIN_DIMENSION || self.depth < MIN_DIMENSION {
            return Err(MazeError::InvalidConfig(format!(
                "grid must be at least {}x{}, got {}x{}",
                MIN_DIMENSION, MIN_DIMENSION, self.width, self.depth
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.depth).is_err() {
            return Err(MazeError::InvalidConfig(format!(
                "grid {}x{} exceeds coordinate range",
                self.width, self.depth
            )));
        }
        match self.width.checked_mul(self.depth) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(MazeError::InvalidConfig(format!(
                    "grid {}x{} exceeds the {} cell limit",
                    self.width, self.depth, MAX_CELLS
                )))
            }
        }
        if !(0.0..=1.0).contains(&self.open_probability) {
            return Err(MazeError::InvalidConfig(format!(
                "open_probability must be within [0, 1], got {}",
                self.open_probability
            )));
        }
        if !(self.scale > 0.0) {
            return Err(MazeError::InvalidConfig(format!(
                "scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
