//! Maze Generation and Endpoint Selection
//!
//! Carves a [`Grid`] and picks start/goal cells. All randomness comes from an
//! injected RNG so a fixed seed reproduces the same maze and endpoints.
//!
//! # Example
//!
//! ```rust
//! use mazer_library::algorithms::generator::{pick_endpoints, Backtracker, MazeGenerator};
//! use mazer_library::algorithms::grid::Grid;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let mut grid = Grid::new(11, 11);
//! Backtracker.generate(&mut grid, &mut rng);
//!
//! let (start, goal) = pick_endpoints(&grid, &mut rng).unwrap();
//! assert_ne!(start, goal);
//! ```

use crate::algorithms::grid::{Cell, Grid};
use mazer_core::{GeneratorKind, Location, MazeConfig, MazeError, MazeResult};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use tracing::info;

/// Strategy for carving open cells into a grid
pub trait MazeGenerator {
    fn name(&self) -> &'static str;

    /// Overwrite every cell of `grid`
    fn generate(&self, grid: &mut Grid, rng: &mut dyn RngCore);
}

/// Independent coin flip per cell, border included. Not guaranteed solvable.
#[derive(Debug, Clone, Copy)]
pub struct RandomFill {
    pub open_probability: f64,
}

impl Default for RandomFill {
    fn default() -> Self {
        Self {
            open_probability: 0.5,
        }
    }
}

impl MazeGenerator for RandomFill {
    fn name(&self) -> &'static str {
        "random-fill"
    }

    fn generate(&self, grid: &mut Grid, rng: &mut dyn RngCore) {
        for z in 0..grid.depth() {
            for x in 0..grid.width() {
                let cell = if rng.gen::<f64>() < self.open_probability {
                    Cell::Open
                } else {
                    Cell::Wall
                };
                grid.set(Location::new(x as i32, z as i32), cell);
            }
        }
    }
}

/// Depth-first backtracker on odd coordinates.
///
/// Every interior cell with odd x and odd z ends up open and connected to (1, 1).
#[derive(Debug, Clone, Copy, Default)]
pub struct Backtracker;

impl MazeGenerator for Backtracker {
    fn name(&self) -> &'static str {
        "backtracker"
    }

    fn generate(&self, grid: &mut Grid, rng: &mut dyn RngCore) {
        grid.fill(Cell::Wall);

        let origin = Location::new(1, 1);
        if !grid.is_interior(origin) {
            return;
        }

        let width = grid.width();
        let mut visited = vec![false; grid.area()];
        let visit_index = |loc: Location| loc.z as usize * width + loc.x as usize;

        let mut stack = vec![origin];
        visited[visit_index(origin)] = true;
        grid.set(origin, Cell::Open);

        while let Some(&current) = stack.last() {
            let candidates: Vec<(Location, Location)> = [(2, 0), (0, 2), (-2, 0), (0, -2)]
                .iter()
                .map(|(dx, dz)| {
                    let next = Location::new(current.x + dx, current.z + dz);
                    let wall = Location::new(current.x + dx / 2, current.z + dz / 2);
                    (next, wall)
                })
                .filter(|(next, _)| grid.is_interior(*next) && !visited[visit_index(*next)])
                .collect();

            if candidates.is_empty() {
                stack.pop();
                continue;
            }

            let (next, wall) = candidates[rng.gen_range(0..candidates.len())];
            grid.set(wall, Cell::Open);
            grid.set(next, Cell::Open);
            visited[visit_index(next)] = true;
            stack.push(next);
        }
    }
}

/// Generator selected by the config
pub fn generator_for(config: &MazeConfig) -> Box<dyn MazeGenerator> {
    match config.generator {
        GeneratorKind::RandomFill => Box::new(RandomFill {
            open_probability: config.open_probability,
        }),
        GeneratorKind::Backtracker => Box::new(Backtracker),
    }
}

/// Build a fresh grid of the configured size and carve it
pub fn build_grid(config: &MazeConfig, rng: &mut dyn RngCore) -> Grid {
    let generator = generator_for(config);
    let mut grid = Grid::new(config.width, config.depth);
    generator.generate(&mut grid, rng);

    info!(
        "Generated {}x{} maze with {} ({} open cells)",
        config.width,
        config.depth,
        generator.name(),
        grid.open_cells().len()
    );
    grid
}

/// Shuffle the passable cells and take the first two as start and goal
pub fn pick_endpoints(grid: &Grid, rng: &mut dyn RngCore) -> MazeResult<(Location, Location)> {
    let mut cells = grid.open_cells();
    if cells.len() < 2 {
        return Err(MazeError::NotEnoughOpenCells { found: cells.len() });
    }
    cells.shuffle(rng);
    Ok((cells[0], cells[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::{HashSet, VecDeque};

    fn reachable_from(grid: &Grid, start: Location) -> HashSet<Location> {
        let mut seen = HashSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(current) = queue.pop_front() {
            for direction in mazer_core::Direction::ALL {
                let next = current + direction;
                if grid.is_passable(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    #[test]
    fn test_random_fill_is_seeded() {
        let fill = RandomFill::default();
        let mut a = Grid::new(20, 20);
        let mut b = Grid::new(20, 20);
        fill.generate(&mut a, &mut ChaCha8Rng::seed_from_u64(3));
        fill.generate(&mut b, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(a, b);

        let mut c = Grid::new(20, 20);
        fill.generate(&mut c, &mut ChaCha8Rng::seed_from_u64(4));
        assert_ne!(a, c);
    }

    #[test]
    fn test_random_fill_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let mut grid = Grid::new(8, 8);

        RandomFill {
            open_probability: 1.0,
        }
        .generate(&mut grid, &mut rng);
        assert_eq!(grid.open_cells().len(), 36);

        RandomFill {
            open_probability: 0.0,
        }
        .generate(&mut grid, &mut rng);
        assert!(grid.open_cells().is_empty());
    }

    #[test]
    fn test_random_fill_roughly_half_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut grid = Grid::new(52, 52);
        RandomFill::default().generate(&mut grid, &mut rng);

        let open = grid.open_cells().len() as f64;
        let ratio = open / 2500.0;
        assert!(ratio > 0.4 && ratio < 0.6, "open ratio {}", ratio);
    }

    #[test]
    fn test_backtracker_connects_odd_cells() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut grid = Grid::new(21, 15);
        Backtracker.generate(&mut grid, &mut rng);

        let reachable = reachable_from(&grid, Location::new(1, 1));
        for z in (1..14).step_by(2) {
            for x in (1..20).step_by(2) {
                assert!(reachable.contains(&Location::new(x, z)));
            }
        }
        // Everything open is part of the same tree
        assert_eq!(reachable.len(), grid.open_cells().len());
    }

    #[test]
    fn test_backtracker_keeps_border() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut grid = Grid::new(10, 10);
        grid.fill(Cell::Open);
        Backtracker.generate(&mut grid, &mut rng);

        for i in 0..10 {
            assert_eq!(grid.get(Location::new(i, 0)), Some(Cell::Wall));
            assert_eq!(grid.get(Location::new(0, i)), Some(Cell::Wall));
            assert_eq!(grid.get(Location::new(i, 9)), Some(Cell::Wall));
            assert_eq!(grid.get(Location::new(9, i)), Some(Cell::Wall));
        }
    }

    #[test]
    fn test_backtracker_too_small() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut grid = Grid::new(2, 2);
        Backtracker.generate(&mut grid, &mut rng);
        assert!(grid.open_cells().is_empty());
    }

    #[test]
    fn test_build_grid_uses_config() {
        let config = MazeConfig {
            width: 9,
            depth: 7,
            generator: GeneratorKind::Backtracker,
            ..MazeConfig::default()
        };
        let grid = build_grid(&config, &mut ChaCha8Rng::seed_from_u64(1));
        assert_eq!(grid.width(), 9);
        assert_eq!(grid.depth(), 7);
        assert!(grid.is_passable(Location::new(1, 1)));
        assert_eq!(generator_for(&config).name(), "backtracker");
    }

    #[test]
    fn test_pick_endpoints() {
        let mut grid = Grid::new(6, 6);
        grid.fill(Cell::Open);

        let (start, goal) = pick_endpoints(&grid, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_ne!(start, goal);
        assert!(grid.is_passable(start));
        assert!(grid.is_passable(goal));

        let again = pick_endpoints(&grid, &mut ChaCha8Rng::seed_from_u64(9)).unwrap();
        assert_eq!(again, (start, goal));
    }

    #[test]
    fn test_pick_endpoints_needs_two_cells() {
        let mut grid = Grid::new(5, 5);
        grid.set(Location::new(2, 2), Cell::Open);

        let result = pick_endpoints(&grid, &mut ChaCha8Rng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(MazeError::NotEnoughOpenCells { found: 1 })
        ));
    }
}
