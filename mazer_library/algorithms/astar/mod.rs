//! Incremental A* Pathfinding
//!
//! Grid search that advances one frontier expansion per call, so a caller can
//! show the open and closed sets growing step by step.
//!
//! # Features
//!
//! - 4-directional movement over a [`Grid`]
//! - Euclidean step cost and heuristic
//! - Open/closed node arena with parent handles
//! - Per-step [`Expansion`] reports for visualization
//! - Explicit `Idle -> Searching -> Done | Exhausted` state machine
//!
//! # Behaviour notes
//!
//! - Revisiting an open node overwrites its costs and parent even when the new
//!   path is not cheaper.
//! - Closed nodes are never reopened.
//! - Ties on F go to the node earliest in the open list. The list is stably
//!   re-sorted by F on every step and keeps that order afterwards.
//! - The start node sits in the open list until the first step closes it, so
//!   the second step expands the start again.
//!
//! # Example
//!
//! ```rust
//! use mazer_library::algorithms::astar::{AStarSearch, SearchState};
//! use mazer_library::algorithms::grid::Grid;
//! use mazer_core::Location;
//!
//! let grid = Grid::from_rows(&[
//!     "#####",
//!     "#...#",
//!     "#.#.#",
//!     "#...#",
//!     "#####",
//! ]).unwrap();
//!
//! let mut search = AStarSearch::new();
//! search.begin_search(&grid, Location::new(1, 1), Location::new(3, 3)).unwrap();
//!
//! while search.state() == SearchState::Searching {
//!     search.expand_once(&grid).unwrap();
//! }
//!
//! let path = search.reconstruct_path().unwrap();
//! assert_eq!(path.first(), Some(&Location::new(3, 3)));
//! assert_eq!(path.last(), Some(&Location::new(1, 1)));
//! ```

pub mod node;
pub mod path;


pub use node::{NodeId, NodeRegistry, NodeStatus, SearchNode};
pub use path::{path_cost, reconstruct};

use crate::algorithms::grid::Grid;
use mazer_core::{Direction, Location, MazeError, MazeResult};
use std::fmt;
use tracing::{debug, info, warn};

/// Search session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    Searching,
    Done,
    Exhausted,
}

impl fmt::Display for SearchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchState::Idle => write!(f, "Idle"),
            SearchState::Searching => write!(f, "Searching"),
            SearchState::Done => write!(f, "Done"),
            SearchState::Exhausted => write!(f, "Exhausted"),
        }
    }
}

/// Costs of one node at the moment it was reported
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub location: Location,
    pub g: f64,
    pub h: f64,
    pub f: f64,
}

impl NodeSnapshot {
    fn of(id: NodeId, node: &SearchNode) -> Self {
        Self {
            id,
            location: node.location,
            g: node.g,
            h: node.h,
            f: node.f,
        }
    }
}

/// What a single `expand_once` call changed
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expansion {
    /// Neighbours added to the open list, in direction order
    pub inserted: Vec<NodeSnapshot>,
    /// Open neighbours whose costs and parent were overwritten
    pub updated: Vec<NodeSnapshot>,
    /// Node moved from open to closed; it is the new frontier
    pub closed: Option<NodeSnapshot>,
    /// The expanded frontier was the goal; nothing else changed
    pub reached_goal: bool,
}

/// Step-driven A* search over a borrowed grid.
///
/// The grid is passed into each call rather than stored, so one grid can
/// serve several independent searches.
#[derive(Debug)]
pub struct AStarSearch {
    registry: NodeRegistry,
    state: SearchState,
    start: Option<NodeId>,
    goal: Option<Location>,
    frontier: Option<NodeId>,
    steps: usize,
}

impl Default for AStarSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl AStarSearch {
    pub fn new() -> Self {
        Self {
            registry: NodeRegistry::new(),
            state: SearchState::Idle,
            start: None,
            goal: None,
            frontier: None,
            steps: 0,
        }
    }

    /// Reset the session and seed it with `start` as the only open node.
    ///
    /// Both endpoints must be passable interior cells. On error the previous
    /// session is left as it was.
    pub fn begin_search(
        &mut self,
        grid: &Grid,
        start: Location,
        goal: Location,
    ) -> MazeResult<NodeId> {
        for (location, role) in [(start, "start"), (goal, "goal")] {
            if !grid.is_passable(location) {
                let reason = if grid.is_interior(location) {
                    format!("{} is a wall", role)
                } else {
                    format!("{} is outside the grid interior", role)
                };
                return Err(MazeError::InvalidLocation { location, reason });
            }
        }

        self.registry.clear();
        let start_id = self.registry.insert_open(start, 0.0, 0.0, None);
        self.start = Some(start_id);
        self.goal = Some(goal);
        self.frontier = Some(start_id);
        self.steps = 0;
        self.state = SearchState::Searching;

        info!("Search started from {} to {}", start, goal);
        Ok(start_id)
    }

    /// Expand the current frontier node.
    ///
    /// Returns [`MazeError::SearchExhausted`] (and moves to `Exhausted`) when
    /// the open list runs dry, and [`MazeError::InvalidState`] outside `Searching`.
    pub fn expand_once(&mut self, grid: &Grid) -> MazeResult<Expansion> {
        let (frontier_id, goal) = match (self.state, self.frontier, self.goal) {
            (SearchState::Searching, Some(frontier), Some(goal)) => (frontier, goal),
            _ => return Err(self.invalid_state("expand")),
        };
        let current = *self
            .registry
            .get(frontier_id)
            .ok_or_else(|| self.invalid_state("expand"))?;

        self.steps += 1;

        if current.location == goal {
            self.state = SearchState::Done;
            info!(
                "Path found to {} after {} steps ({} nodes closed)",
                goal,
                self.steps,
                self.registry.closed_ids().len()
            );
            return Ok(Expansion {
                reached_goal: true,
                ..Expansion::default()
            });
        }

        let mut expansion = Expansion::default();
        for direction in Direction::ALL {
            let neighbor = direction + current.location;

            if !grid.is_passable(neighbor) || self.registry.is_closed(neighbor) {
                continue;
            }

            let g = current.g + current.location.euclidean_distance(neighbor);
            let h = neighbor.euclidean_distance(goal);

            match self.registry.lookup(neighbor) {
                Some(id) => {
                    let overwritten = self.registry.overwrite(id, g, h, frontier_id);
                    debug_assert!(overwritten, "{} is indexed but not open", neighbor);
                    if !overwritten {
                        continue;
                    }
                    if let Some(node) = self.registry.get(id) {
                        expansion.updated.push(NodeSnapshot::of(id, node));
                    }
                }
                None => {
                    let id = self.registry.insert_open(neighbor, g, h, Some(frontier_id));
                    if let Some(node) = self.registry.get(id) {
                        expansion.inserted.push(NodeSnapshot::of(id, node));
                    }
                }
            }
        }

        match self.registry.close_best() {
            Some(closed_id) => {
                self.frontier = Some(closed_id);
                let closed = self
                    .registry
                    .get(closed_id)
                    .map(|node| NodeSnapshot::of(closed_id, node));
                if let Some(snapshot) = &closed {
                    debug!(
                        "Step {}: expanded {}, closed {} (g={:.2} h={:.2} f={:.2}), {} open",
                        self.steps,
                        current.location,
                        snapshot.location,
                        snapshot.g,
                        snapshot.h,
                        snapshot.f,
                        self.registry.open_ids().len()
                    );
                }
                expansion.closed = closed;
                Ok(expansion)
            }
            None => {
                self.state = SearchState::Exhausted;
                let start = self.start_location().unwrap_or(current.location);
                warn!(
                    "Search exhausted after {} steps: no path from {} to {}",
                    self.steps, start, goal
                );
                Err(MazeError::SearchExhausted { start, goal })
            }
        }
    }

    /// Keep expanding until `Done`, failing after `max_steps` calls.
    /// Returns the number of steps taken in this session.
    pub fn run_to_completion(&mut self, grid: &Grid, max_steps: usize) -> MazeResult<usize> {
        if self.state != SearchState::Searching {
            return Err(self.invalid_state("run"));
        }
        while self.state == SearchState::Searching {
            if self.steps >= max_steps {
                return Err(MazeError::StepLimitReached { limit: max_steps });
            }
            self.expand_once(grid)?;
        }
        Ok(self.steps)
    }

    /// Path from the current frontier back to the start, goal end first
    pub fn reconstruct_path(&self) -> MazeResult<Vec<Location>> {
        match self.frontier {
            Some(frontier) if self.state != SearchState::Idle => {
                self.reconstruct_path_from(frontier)
            }
            _ => Err(self.invalid_state("reconstruct a path")),
        }
    }

    /// Path from any node of this session back to the start
    pub fn reconstruct_path_from(&self, node: NodeId) -> MazeResult<Vec<Location>> {
        let start = match (self.state, self.start_location()) {
            (SearchState::Idle, _) | (_, None) => {
                return Err(self.invalid_state("reconstruct a path"))
            }
            (_, Some(start)) => start,
        };
        reconstruct(&self.registry, node, start, self.state)
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == SearchState::Done
    }

    /// Expansion calls made since the last `begin_search`
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn start_location(&self) -> Option<Location> {
        self.start
            .and_then(|id| self.registry.get(id))
            .map(|node| node.location)
    }

    pub fn goal(&self) -> Option<Location> {
        self.goal
    }

    /// Most recently closed node (the start before the first step)
    pub fn frontier(&self) -> Option<&SearchNode> {
        self.frontier.and_then(|id| self.registry.get(id))
    }

    pub fn frontier_id(&self) -> Option<NodeId> {
        self.frontier
    }

    pub fn node(&self, id: NodeId) -> Option<&SearchNode> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    /// Open nodes in list order
    pub fn open_nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.registry
            .open_ids()
            .iter()
            .filter_map(move |id| self.registry.get(*id))
    }

    /// Closed nodes in closing order
    pub fn closed_nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.registry
            .closed_ids()
            .iter()
            .filter_map(move |id| self.registry.get(*id))
    }

    pub fn is_open(&self, location: Location) -> bool {
        self.registry.is_open(location)
    }

    pub fn is_closed(&self, location: Location) -> bool {
        self.registry.is_closed(location)
    }

    fn invalid_state(&self, operation: &'static str) -> MazeError {
        MazeError::InvalidState {
            operation,
            state: self.state.to_string(),
        }
    }
}
