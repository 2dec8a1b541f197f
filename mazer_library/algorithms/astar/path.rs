//! Parent-chain walk from a node back to the search start

use super::node::{NodeId, NodeRegistry};
use super::SearchState;
use mazer_core::{Location, MazeError, MazeResult};

/// Locations from `from` back to `start`, both inclusive, in goal-to-start order.
///
/// A handle from another session is [`MazeError::InvalidState`], tagged with
/// `state`. A missing parent before `start` is reached, or a walk longer than
/// the arena (a cycle), is reported as [`MazeError::CorruptChain`].
pub fn reconstruct(
    registry: &NodeRegistry,
    from: NodeId,
    start: Location,
    state: SearchState,
) -> MazeResult<Vec<Location>> {
    let mut node = registry.get(from).ok_or_else(|| MazeError::InvalidState {
        operation: "reconstruct a path from a node of another session",
        state: state.to_string(),
    })?;

    let mut path = Vec::new();
    for _ in 0..registry.len() {
        path.push(node.location);
        if node.location == start {
            return Ok(path);
        }
        node = match node.parent.and_then(|parent| registry.get(parent)) {
            Some(parent) => parent,
            None => return Err(MazeError::CorruptChain { at: node.location }),
        };
    }

    Err(MazeError::CorruptChain { at: node.location })
}

/// Total step cost of a path
pub fn path_cost(path: &[Location]) -> f64 {
    path.windows(2)
        .map(|pair| pair[0].euclidean_distance(pair[1]))
        .sum()
}
