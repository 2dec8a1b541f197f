//! Randomized checks of the A* engine against generated mazes

use approx::assert_relative_eq;
use mazer_core::{Direction, GeneratorKind, Location, MazeConfig, MazeError};
use mazer_library::algorithms::astar::path_cost;
use mazer_library::{build_grid, pick_endpoints, AStarSearch, Grid, SearchState, BORDER_SENTINEL};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashSet, VecDeque};

fn reachable(grid: &Grid, start: Location, goal: Location) -> bool {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for direction in Direction::ALL {
            let next = current + direction;
            if grid.is_passable(next) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

fn assert_open_set_invariant(search: &AStarSearch) {
    let mut open = HashSet::new();
    for node in search.open_nodes() {
        assert!(open.insert(node.location), "{} twice in open", node.location);
    }
    for node in search.closed_nodes() {
        assert!(
            !open.contains(&node.location),
            "{} both open and closed",
            node.location
        );
    }
}

/// Step the search by hand, checking the open/closed split after every call
fn drive(search: &mut AStarSearch, grid: &Grid) -> Result<(), MazeError> {
    let limit = grid.area();
    while search.state() == SearchState::Searching {
        assert!(search.steps() < limit, "no verdict within {} steps", limit);
        search.expand_once(grid)?;
        assert_open_set_invariant(search);
    }
    Ok(())
}

fn config(generator: GeneratorKind, width: usize, depth: usize) -> MazeConfig {
    MazeConfig {
        width,
        depth,
        generator,
        ..MazeConfig::default()
    }
}

#[test]
fn test_backtracker_mazes_always_solve() {
    for seed in 0..12 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = build_grid(&config(GeneratorKind::Backtracker, 21, 17), &mut rng);
        let (start, goal) = pick_endpoints(&grid, &mut rng).unwrap();

        let mut search = AStarSearch::new();
        search.begin_search(&grid, start, goal).unwrap();
        drive(&mut search, &grid).unwrap();
        assert!(search.is_done(), "seed {}", seed);
        assert!(search.steps() <= grid.area());

        let path = search.reconstruct_path().unwrap();
        assert_eq!(path.first(), Some(&goal));
        assert_eq!(path.last(), Some(&start));
        for pair in path.windows(2) {
            assert!(pair[0].is_adjacent(pair[1]));
            assert!(grid.is_passable(pair[1]));
        }
        let distinct: HashSet<_> = path.iter().collect();
        assert_eq!(distinct.len(), path.len());

        let goal_node = search.frontier().unwrap();
        assert_relative_eq!(path_cost(&path), goal_node.g, epsilon = 1e-9);
    }
}

#[test]
fn test_random_fill_verdict_matches_reachability() {
    let mut solved = 0;
    let mut exhausted = 0;

    for seed in 0..60 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let fill = MazeConfig {
            open_probability: 0.6,
            ..config(GeneratorKind::RandomFill, 14, 14)
        };
        let grid = build_grid(&fill, &mut rng);
        let Ok((start, goal)) = pick_endpoints(&grid, &mut rng) else {
            continue;
        };

        let mut search = AStarSearch::new();
        search.begin_search(&grid, start, goal).unwrap();
        match drive(&mut search, &grid) {
            Ok(()) => {
                assert!(reachable(&grid, start, goal), "seed {}", seed);
                solved += 1;
            }
            Err(err) => {
                assert!(err.is_no_path(), "seed {}: {}", seed, err);
                assert_eq!(search.state(), SearchState::Exhausted);
                assert!(!reachable(&grid, start, goal), "seed {}", seed);
                exhausted += 1;
            }
        }
    }

    // Fills near the percolation threshold give both outcomes over this many seeds
    assert!(solved > 0);
    assert!(exhausted > 0);
}

#[test]
fn test_same_seed_same_search() {
    let run = |seed: u64| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = build_grid(&config(GeneratorKind::Backtracker, 15, 15), &mut rng);
        let (start, goal) = pick_endpoints(&grid, &mut rng).unwrap();
        let mut search = AStarSearch::new();
        search.begin_search(&grid, start, goal).unwrap();
        search.run_to_completion(&grid, grid.area()).unwrap();
        (search.steps(), search.reconstruct_path().unwrap())
    };

    assert_eq!(run(99), run(99));
}

#[test]
fn test_neighbor_counts_never_index_outside() {
    let mut rng = ChaCha8Rng::seed_from_u64(8);
    let grid = build_grid(&config(GeneratorKind::RandomFill, 9, 6), &mut rng);

    for z in -3..9 {
        for x in -3..12 {
            let loc = Location::new(x, z);
            let orthogonal = grid.count_orthogonal_open_neighbors(loc);
            let diagonal = grid.count_diagonal_open_neighbors(loc);
            if grid.is_interior(loc) {
                assert!(orthogonal <= 4 && diagonal <= 4);
            } else {
                assert_eq!(orthogonal, BORDER_SENTINEL);
                assert_eq!(diagonal, BORDER_SENTINEL);
                assert_eq!(grid.count_all_open_neighbors(loc), 2 * BORDER_SENTINEL);
            }
        }
    }
}

#[test]
fn test_reusing_engine_across_mazes() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let mut search = AStarSearch::new();

    for _ in 0..5 {
        let grid = build_grid(&config(GeneratorKind::Backtracker, 11, 11), &mut rng);
        let (start, goal) = pick_endpoints(&grid, &mut rng).unwrap();
        search.begin_search(&grid, start, goal).unwrap();
        assert_eq!(search.steps(), 0);
        assert_eq!(search.open_nodes().count(), 1);
        assert_eq!(search.closed_nodes().count(), 0);

        drive(&mut search, &grid).unwrap();
        assert!(search.is_done());
    }
}
