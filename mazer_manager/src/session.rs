//! Interactive maze session
//!
//! Binds one grid, one search engine and one seeded RNG, and maps the
//! keyboard triggers onto the engine.

use mazer_core::{Location, MazeConfig, MazeError, MazeResult};
use mazer_library::{build_grid, pick_endpoints, AStarSearch, Expansion, Grid};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

/// A single key press from the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Pick fresh endpoints and start a search (`p`)
    Begin,
    /// Expand the frontier once (`c`)
    Step,
    /// Show the path to the current frontier (`m`)
    Path,
    /// Carve a new maze (`g`)
    Regenerate,
    /// Leave the session (`q`)
    Quit,
}

impl Trigger {
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'p' => Some(Trigger::Begin),
            'c' => Some(Trigger::Step),
            'm' => Some(Trigger::Path),
            'g' => Some(Trigger::Regenerate),
            'q' => Some(Trigger::Quit),
            _ => None,
        }
    }
}

/// What a trigger produced
#[derive(Debug, Clone, PartialEq)]
pub enum TriggerOutcome {
    Began { start: Location, goal: Location },
    Stepped(Expansion),
    Path(Vec<Location>),
    Regenerated,
    Quit,
}

/// Result of a full solve
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Found { path: Vec<Location>, steps: usize },
    NoPath { steps: usize },
}

pub struct MazeSession {
    config: MazeConfig,
    grid: Grid,
    search: AStarSearch,
    rng: ChaCha8Rng,
}

impl MazeSession {
    /// Validate the config, seed the RNG and carve the first maze
    pub fn new(config: MazeConfig) -> MazeResult<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => {
                debug!("Seeding maze RNG with {}", seed);
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };
        let grid = build_grid(&config, &mut rng);

        Ok(Self {
            config,
            grid,
            search: AStarSearch::new(),
            rng,
        })
    }

    pub fn config(&self) -> &MazeConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn search(&self) -> &AStarSearch {
        &self.search
    }

    /// Replace the maze. Any running search belonged to the old grid and is dropped.
    pub fn regenerate(&mut self) {
        self.grid = build_grid(&self.config, &mut self.rng);
        self.search = AStarSearch::new();
    }

    /// Shuffle the open cells, take two as endpoints and start searching
    pub fn begin(&mut self) -> MazeResult<(Location, Location)> {
        let (start, goal) = pick_endpoints(&self.grid, &mut self.rng)?;
        self.search.begin_search(&self.grid, start, goal)?;
        Ok((start, goal))
    }

    pub fn step(&mut self) -> MazeResult<Expansion> {
        self.search.expand_once(&self.grid)
    }

    pub fn path(&self) -> MazeResult<Vec<Location>> {
        self.search.reconstruct_path()
    }

    /// Begin a search and expand until it settles, bounded by the grid area
    pub fn solve(&mut self) -> MazeResult<SolveOutcome> {
        self.begin()?;
        let limit = self.grid.area();

        match self.search.run_to_completion(&self.grid, limit) {
            Ok(steps) => {
                let path = self.search.reconstruct_path()?;
                info!("Solved in {} steps, path of {} cells", steps, path.len());
                Ok(SolveOutcome::Found { path, steps })
            }
            Err(MazeError::SearchExhausted { .. }) => Ok(SolveOutcome::NoPath {
                steps: self.search.steps(),
            }),
            Err(e) => Err(e),
        }
    }

    pub fn handle(&mut self, trigger: Trigger) -> MazeResult<TriggerOutcome> {
        match trigger {
            Trigger::Begin => {
                let (start, goal) = self.begin()?;
                Ok(TriggerOutcome::Began { start, goal })
            }
            Trigger::Step => self.step().map(TriggerOutcome::Stepped),
            Trigger::Path => self.path().map(TriggerOutcome::Path),
            Trigger::Regenerate => {
                self.regenerate();
                Ok(TriggerOutcome::Regenerated)
            }
            Trigger::Quit => Ok(TriggerOutcome::Quit),
        }
    }

    /// World-space position of a cell, centred on the grid
    pub fn world_position(&self, location: Location) -> (f64, f64) {
        self.grid.to_world(location, self.config.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazer_core::GeneratorKind;

    fn seeded(generator: GeneratorKind) -> MazeConfig {
        MazeConfig {
            width: 13,
            depth: 11,
            generator,
            seed: Some(17),
            ..MazeConfig::default()
        }
    }

    #[test]
    fn test_trigger_keys() {
        assert_eq!(Trigger::from_key('p'), Some(Trigger::Begin));
        assert_eq!(Trigger::from_key('C'), Some(Trigger::Step));
        assert_eq!(Trigger::from_key('m'), Some(Trigger::Path));
        assert_eq!(Trigger::from_key('g'), Some(Trigger::Regenerate));
        assert_eq!(Trigger::from_key('q'), Some(Trigger::Quit));
        assert_eq!(Trigger::from_key('x'), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MazeConfig {
            width: 2,
            ..MazeConfig::default()
        };
        assert!(matches!(
            MazeSession::new(config),
            Err(MazeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_step_before_begin() {
        let mut session = MazeSession::new(seeded(GeneratorKind::Backtracker)).unwrap();
        assert!(matches!(
            session.handle(Trigger::Step),
            Err(MazeError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_regenerate_drops_search() {
        let mut session = MazeSession::new(seeded(GeneratorKind::Backtracker)).unwrap();
        session.begin().unwrap();
        session.step().unwrap();

        session.regenerate();
        assert!(session.search().start_location().is_none());
        assert!(matches!(session.path(), Err(MazeError::InvalidState { .. })));
    }

    #[test]
    fn test_world_position_uses_scale() {
        let session = MazeSession::new(MazeConfig {
            width: 5,
            depth: 5,
            scale: 2.0,
            seed: Some(1),
            ..MazeConfig::default()
        })
        .unwrap();
        assert_eq!(session.world_position(Location::new(2, 2)), (0.0, 0.0));
        assert_eq!(session.world_position(Location::new(4, 0)), (4.0, -4.0));
    }
}
