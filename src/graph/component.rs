//! Connected components as immutable snapshots.
//!
//! Decomposition cuts the whole vertex set into [`UserTree`]s, one per
//! connected component under undirected reachability. A tree is a unit of
//! selection for the rollout policies: created fresh on every decomposition,
//! never mutated, discarded once the infection decision is applied.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::graph::traversal::{Bfs, Mark};
use crate::graph::UserGraph;
use crate::user::UserId;

/// An immutable snapshot of one connected component.
///
/// Members are recorded in BFS discovery order from the component's traversal
/// root, so `members()[0]` is that root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserTree {
    members: Vec<UserId>,
}

impl UserTree {
    pub(crate) fn new(members: Vec<UserId>) -> Self {
        Self { members }
    }

    /// Returns the member ids in discovery order.
    pub fn members(&self) -> &[UserId] {
        &self.members
    }

    /// Returns the number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the component has no members. Decomposition never
    /// produces such a tree.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the id of the traversal root, or `None` for an empty tree.
    /// Any member would do; the root is simply the one cheap to name.
    pub fn representative(&self) -> Option<UserId> {
        self.members.first().copied()
    }
}

impl UserGraph {
    /// Decomposes the whole vertex set into connected components.
    ///
    /// Vertices are considered in insertion order; each one not yet reached
    /// seeds an unlimited BFS whose emitted order becomes one [`UserTree`].
    /// Every vertex lands in exactly one tree.
    ///
    /// The result is sorted by descending size, stable across equal sizes
    /// (discovery order kept). Trying large components first lets the
    /// exact-count probe in [`infect_exact`](Self::infect_exact) find a
    /// satisfying combination faster on typical inputs, and keeps the output
    /// reproducible for a fixed construction sequence.
    pub fn decompose(&self) -> Vec<UserTree> {
        let mut bfs = Bfs::new(self, std::iter::empty());
        let mut trees = Vec::new();
        for id in self.user_ids() {
            if bfs.mark(id) != Mark::Unvisited {
                continue;
            }
            bfs.push_root(id);
            let members: Vec<UserId> = bfs.by_ref().collect();
            if !members.is_empty() {
                trace!(root = id, size = members.len(), "component found");
                trees.push(UserTree::new(members));
            }
        }
        trees.sort_by(|a, b| b.len().cmp(&a.len()));
        trees
    }
}
