//! Search node arena
//!
//! Nodes live in a `Vec` and refer to their parent by [`NodeId`]. A location
//! index guarantees one live node per cell across the open and closed sets.

use mazer_core::Location;
use std::collections::HashMap;

/// Handle to a node in one search session.
///
/// Handles carry the session generation, so a handle kept across
/// `begin_search` no longer resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub fn index(&self) -> usize {
        self.index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeStatus {
    Open,
    Closed,
}

/// Per-location search bookkeeping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub location: Location,
    /// Cost from the start along the recorded parent chain
    pub g: f64,
    /// Straight-line estimate to the goal
    pub h: f64,
    pub f: f64,
    pub parent: Option<NodeId>,
    pub status: NodeStatus,
}

/// Open list, closed list and the node arena behind them
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<SearchNode>,
    by_location: HashMap<Location, NodeId>,
    open: Vec<NodeId>,
    closed: Vec<NodeId>,
    generation: u32,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every node and invalidate outstanding handles
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.by_location.clear();
        self.open.clear();
        self.closed.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes.get(id.index)
    }

    pub fn lookup(&self, location: Location) -> Option<NodeId> {
        self.by_location.get(&location).copied()
    }

    pub fn is_open(&self, location: Location) -> bool {
        self.status_of(location) == Some(NodeStatus::Open)
    }

    pub fn is_closed(&self, location: Location) -> bool {
        self.status_of(location) == Some(NodeStatus::Closed)
    }

    fn status_of(&self, location: Location) -> Option<NodeStatus> {
        self.lookup(location)
            .and_then(|id| self.get(id))
            .map(|node| node.status)
    }

    /// Open handles in list order (the order ties are broken in)
    pub fn open_ids(&self) -> &[NodeId] {
        &self.open
    }

    /// Closed handles in the order they were closed
    pub fn closed_ids(&self) -> &[NodeId] {
        &self.closed
    }

    /// Add a new open node at the back of the open list
    pub(crate) fn insert_open(
        &mut self,
        location: Location,
        g: f64,
        h: f64,
        parent: Option<NodeId>,
    ) -> NodeId {
        debug_assert!(
            !self.by_location.contains_key(&location),
            "duplicate node for {}",
            location
        );

        let id = NodeId {
            index: self.nodes.len(),
            generation: self.generation,
        };
        self.nodes.push(SearchNode {
            location,
            g,
            h,
            f: g + h,
            parent,
            status: NodeStatus::Open,
        });
        self.by_location.insert(location, id);
        self.open.push(id);
        id
    }

    /// Replace the costs and parent of an open node in place, keeping its list position.
    /// Closed nodes are left untouched.
    pub(crate) fn overwrite(&mut self, id: NodeId, g: f64, h: f64, parent: NodeId) -> bool {
        if id.generation != self.generation {
            return false;
        }
        match self.nodes.get_mut(id.index) {
            Some(node) if node.status == NodeStatus::Open => {
                node.g = g;
                node.h = h;
                node.f = g + h;
                node.parent = Some(parent);
                true
            }
            _ => false,
        }
    }

    /// Stable-sort the open list by F and move its head to the closed list.
    /// The sorted order is kept, so equal-F nodes stay in their list order.
    pub(crate) fn close_best(&mut self) -> Option<NodeId> {
        let nodes = &self.nodes;
        self.open
            .sort_by(|a, b| nodes[a.index].f.total_cmp(&nodes[b.index].f));

        if self.open.is_empty() {
            return None;
        }
        let id = self.open.remove(0);
        self.nodes[id.index].status = NodeStatus::Closed;
        self.closed.push(id);
        Some(id)
    }

    #[cfg(test)]
    pub(crate) fn set_parent(&mut self, id: NodeId, parent: Option<NodeId>) {
        self.nodes[id.index].parent = parent;
    }
}
