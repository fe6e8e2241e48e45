//! Read-only snapshot data for external renderers.
//!
//! Rendering itself lives outside this crate. What the core owes a renderer
//! is a stable, side-effect-free enumeration of vertices, edges and the
//! accumulated infected ids; [`GraphSnapshot`] packages exactly that. Edge
//! labels follow the `"{id}/{version}-{id}/{version}"` convention, pairing
//! each endpoint with the version currently applied to it.

use serde::{Deserialize, Serialize};

use crate::graph::traversal::Bfs;
use crate::graph::UserGraph;
use crate::user::UserId;

/// One vertex as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    /// The user's id.
    pub id: UserId,
    /// The version currently applied to the user.
    pub version: u32,
    /// Whether the user appears in the graph's infected list.
    pub infected: bool,
}

/// One directed teaches-edge as a renderer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeView {
    /// Id of the teaching user.
    pub from: UserId,
    /// Id of the taught user.
    pub to: UserId,
    /// Label of the form `"{from}/{from_version}-{to}/{to_version}"`.
    pub label: String,
}

/// A complete, immutable picture of a graph (or one component of it) at the
/// moment it was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Human-readable title supplied by the caller.
    pub title: String,
    /// Vertices, in the graph's iteration order (or BFS order for a
    /// component snapshot).
    pub users: Vec<UserView>,
    /// One entry per directed teaches-edge between included vertices.
    pub edges: Vec<EdgeView>,
    /// The graph's accumulated infected ids, oldest first.
    pub infected: Vec<UserId>,
}

impl UserGraph {
    /// Takes a snapshot of the whole graph.
    pub fn snapshot(&self, title: &str) -> GraphSnapshot {
        self.snapshot_of(self.user_ids().collect(), title)
    }

    /// Takes a snapshot of the connected component of `root`, or `None` if
    /// `root` is unknown.
    pub fn component_snapshot(&self, root: UserId, title: &str) -> Option<GraphSnapshot> {
        self.user(root)?;
        let members: Vec<UserId> = Bfs::new(self, [root]).collect();
        Some(self.snapshot_of(members, title))
    }

    fn snapshot_of(&self, ids: Vec<UserId>, title: &str) -> GraphSnapshot {
        let mut users = Vec::with_capacity(ids.len());
        let mut edges = Vec::new();
        for &id in &ids {
            let Some(user) = self.user(id) else { continue };
            users.push(UserView {
                id,
                version: user.version(),
                infected: self.infected().contains(&id),
            });
            for &student in user.students() {
                let Some(taught) = self.user(student) else { continue };
                edges.push(EdgeView {
                    from: id,
                    to: student,
                    label: format!(
                        "{}/{}-{}/{}",
                        id,
                        user.version(),
                        student,
                        taught.version()
                    ),
                });
            }
        }
        GraphSnapshot {
            title: title.to_owned(),
            users,
            edges,
            infected: self.infected().to_vec(),
        }
    }
}
