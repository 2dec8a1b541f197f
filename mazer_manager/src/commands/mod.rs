//! Subcommand implementations for the `mazer` binary

pub mod config;
pub mod generate;
pub mod solve;
pub mod step;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use mazer_core::{GeneratorKind, MazeConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GeneratorArg {
    RandomFill,
    Backtracker,
}

impl From<GeneratorArg> for GeneratorKind {
    fn from(arg: GeneratorArg) -> Self {
        match arg {
            GeneratorArg::RandomFill => GeneratorKind::RandomFill,
            GeneratorArg::Backtracker => GeneratorKind::Backtracker,
        }
    }
}

/// Maze options shared by every subcommand. Flags override the config file.
#[derive(Debug, Clone, Default, Args)]
pub struct MazeArgs {
    /// TOML config file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Grid width in cells, border included
    #[arg(short = 'W', long = "width")]
    pub width: Option<usize>,

    /// Grid depth in cells, border included
    #[arg(short = 'D', long = "depth")]
    pub depth: Option<usize>,

    /// Seed for maze and endpoint selection
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Maze carving strategy
    #[arg(short = 'g', long = "generator", value_enum)]
    pub generator: Option<GeneratorArg>,

    /// Chance of a cell being open under random-fill
    #[arg(short = 'p', long = "open-probability")]
    pub open_probability: Option<f64>,
}

impl MazeArgs {
    /// Load the config file (or defaults), apply flag overrides and validate
    pub fn resolve(&self) -> Result<MazeConfig> {
        let mut config = match &self.config {
            Some(path) => MazeConfig::from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => MazeConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(generator) = self.generator {
            config.generator = generator.into();
        }
        if let Some(probability) = self.open_probability {
            config.open_probability = probability;
        }

        config.validate()?;
        Ok(config)
    }
}
