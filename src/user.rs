//! The user vertex model.
//!
//! A [`User`] is one vertex of a [`UserGraph`](crate::UserGraph): an identity,
//! the site version currently applied to it, and two id-based adjacency lists
//! (the users it teaches, the users it is taught by). Adjacency stores **ids**
//! rather than vertex references so a vertex can be serialized, compared and
//! dropped independently of the graph that owns it.
//!
//! The teaches/taught-by relation is symmetric: if `b` appears in `a`'s
//! student list then `a` appears in `b`'s teacher list. Edge insertion goes
//! through [`UserGraph::add_student`](crate::UserGraph::add_student) /
//! [`UserGraph::add_teacher`](crate::UserGraph::add_teacher), which update
//! both endpoints together.

use serde::{Deserialize, Serialize};

/// Identifier of a user vertex. Unique within one graph, assigned at
/// creation, never changed afterwards.
pub type UserId = u32;

/// A user vertex: identity, applied site version, and adjacency.
///
/// Both adjacency lists preserve insertion order and contain no duplicate
/// ids, which keeps every traversal over a fixed graph deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    version: u32,
    students: Vec<UserId>,
    teachers: Vec<UserId>,
}

impl User {
    /// Creates a user with the given id and version 0.
    pub fn new(id: UserId) -> Self {
        Self::with_version(id, 0)
    }

    /// Creates a user with the given id and an explicit initial version.
    pub fn with_version(id: UserId, version: u32) -> Self {
        Self {
            id,
            version,
            students: Vec::new(),
            teachers: Vec::new(),
        }
    }

    /// Returns the id of this user.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Returns the site version currently applied to this user.
    pub fn version(&self) -> u32 {
        self.version
    }

    pub(crate) fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    /// Returns the ids of the users this user teaches, in insertion order.
    pub fn students(&self) -> &[UserId] {
        &self.students
    }

    /// Returns the ids of the users teaching this user, in insertion order.
    pub fn teachers(&self) -> &[UserId] {
        &self.teachers
    }

    /// Checks whether this user teaches `other`.
    pub fn teaches(&self, other: UserId) -> bool {
        self.students.contains(&other)
    }

    /// Checks whether this user is taught by `other`.
    pub fn taught_by(&self, other: UserId) -> bool {
        self.teachers.contains(&other)
    }

    /// Neighbor ids for undirected reachability: students first, then
    /// teachers. Traversals rely on this order.
    pub(crate) fn neighbor_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.students.iter().chain(self.teachers.iter()).copied()
    }

    /// Appends `other` to the student list unless already present.
    /// Returns whether the list changed.
    pub(crate) fn push_student(&mut self, other: UserId) -> bool {
        if self.teaches(other) {
            return false;
        }
        self.students.push(other);
        true
    }

    /// Appends `other` to the teacher list unless already present.
    /// Returns whether the list changed.
    pub(crate) fn push_teacher(&mut self, other: UserId) -> bool {
        if self.taught_by(other) {
            return false;
        }
        self.teachers.push(other);
        true
    }
}
