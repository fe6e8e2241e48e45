//! Per-pass traversal state and the shared breadth-first primitive.
//!
//! Every higher-level operation (infection policies, decomposition, component
//! snapshots) is built on the single [`Bfs`] iterator defined here. Mark
//! state is owned by the pass itself, in a map keyed by user id, never stored
//! on the vertex: each pass starts from a clean slate without touching the
//! graph, and any number of read-only traversals may overlap.

use std::collections::{HashMap, VecDeque};

use crate::graph::UserGraph;
use crate::user::UserId;

/// Transient traversal state of one vertex within a single pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    /// Not yet reached by the pass.
    #[default]
    Unvisited,
    /// Queued, neighbors not yet expanded.
    Discovered,
    /// Expanded and emitted by the pass.
    Done,
}

/// Mark state for one traversal pass. Absent entries are `Unvisited`.
#[derive(Debug, Default)]
struct MarkMap {
    marks: HashMap<UserId, Mark>,
}

impl MarkMap {
    fn get(&self, id: UserId) -> Mark {
        self.marks.get(&id).copied().unwrap_or_default()
    }

    fn set(&mut self, id: UserId, mark: Mark) {
        self.marks.insert(id, mark);
    }
}

/// Breadth-first traversal over a user graph, yielding ids in processed
/// order.
///
/// Edge direction is irrelevant to reachability: for each dequeued vertex
/// both adjacency lists are expanded, students first, then teachers. The
/// queue is strict FIFO, so for a fixed graph the emitted order is fully
/// deterministic.
///
/// A processed-count limit is expressed through the iterator protocol
/// (`take(limit)`); vertices still queued when the caller stops remain
/// [`Mark::Discovered`], observable through [`Bfs::mark`], so "touched but
/// not finalized" state can be told apart from never-reached state.
pub struct Bfs<'g> {
    graph: &'g UserGraph,
    marks: MarkMap,
    queue: VecDeque<UserId>,
}

impl<'g> Bfs<'g> {
    /// Creates a traversal seeded with `roots`.
    ///
    /// Unknown ids and roots already seeded are ignored.
    pub fn new(graph: &'g UserGraph, roots: impl IntoIterator<Item = UserId>) -> Self {
        let mut bfs = Self {
            graph,
            marks: MarkMap::default(),
            queue: VecDeque::new(),
        };
        for root in roots {
            bfs.push_root(root);
        }
        bfs
    }

    /// Seeds a further root, sharing this pass's mark state.
    ///
    /// A no-op for unknown ids and for vertices the pass has already touched.
    /// Decomposition uses this to walk one component after another with a
    /// single mark map.
    pub fn push_root(&mut self, id: UserId) {
        if self.graph.user(id).is_none() {
            return;
        }
        if self.marks.get(id) == Mark::Unvisited {
            self.marks.set(id, Mark::Discovered);
            self.queue.push_back(id);
        }
    }

    /// Returns the mark this pass holds for `id`.
    pub fn mark(&self, id: UserId) -> Mark {
        self.marks.get(id)
    }
}

impl Iterator for Bfs<'_> {
    type Item = UserId;

    fn next(&mut self) -> Option<UserId> {
        let id = self.queue.pop_front()?;
        // Only ids resolved against the graph are ever enqueued.
        if let Some(user) = self.graph.user(id) {
            for nbr in user.neighbor_ids() {
                if self.marks.get(nbr) == Mark::Unvisited && self.graph.user(nbr).is_some() {
                    self.marks.set(nbr, Mark::Discovered);
                    self.queue.push_back(nbr);
                }
            }
        }
        self.marks.set(id, Mark::Done);
        Some(id)
    }
}
