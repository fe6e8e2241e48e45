//! The user graph: vertex storage, edge maintenance, and the rollout
//! policies built on top of them.
//!
//! Graph functionality is organized into focused submodules:
//! - [`traversal`]: per-pass mark state and the shared BFS primitive
//! - [`component`]: connected components as immutable snapshots
//! - `infection`: the version-rollout policies (implemented on [`UserGraph`])

pub mod component;
mod infection;
pub mod traversal;

pub use component::UserTree;
pub use traversal::{Bfs, Mark};

use std::collections::HashMap;

use crate::user::{User, UserId};

/// A graph of users, keyed by id.
///
/// The graph owns every vertex exclusively. Alongside the id map it keeps the
/// insertion order of ids, which fixes the vertex iteration order and thereby
/// makes decomposition and every policy built on it deterministic for a fixed
/// construction sequence.
///
/// Ids infected by any rollout call accumulate in an append-only list for the
/// lifetime of the graph; they are never reset between calls.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_user` | \(O(1)\) amortized | Map insert plus order append |
/// | `add_student` / `add_teacher` | \(O(\text{degree})\) | Duplicate check is a linear id scan |
/// | `user` | \(O(1)\) | Map lookup |
/// | `decompose` | \(O(n + m)\) | One BFS pass over the whole graph |
#[derive(Debug, Clone, Default)]
pub struct UserGraph {
    users: HashMap<UserId, User>,
    order: Vec<UserId>,
    infected: Vec<UserId>,
}

impl UserGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from a sequence of users.
    ///
    /// Insertion order of the sequence becomes the vertex iteration order.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Self {
        let mut graph = Self::new();
        for user in users {
            graph.add_user(user);
        }
        graph
    }

    /// Adds a user to the graph.
    ///
    /// A duplicate id silently replaces the stored vertex; the original
    /// position in the iteration order is kept.
    pub fn add_user(&mut self, user: User) {
        let id = user.id();
        if self.users.insert(id, user).is_none() {
            self.order.push(id);
        }
    }

    /// Looks up a user by id.
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    pub(crate) fn user_mut(&mut self, id: UserId) -> Option<&mut User> {
        self.users.get_mut(&id)
    }

    /// Returns the number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if the graph holds no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Iterates over user ids in insertion order.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        self.order.iter().copied()
    }

    /// Iterates over users in insertion order.
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.order.iter().map(move |id| &self.users[id])
    }

    /// Returns every id infected so far, oldest first.
    ///
    /// Ids repeat if a vertex was infected by more than one call.
    pub fn infected(&self) -> &[UserId] {
        &self.infected
    }

    pub(crate) fn record_infected(&mut self, id: UserId) {
        self.infected.push(id);
    }

    /// Adds a directed teaches-edge from `teacher` to `student`, keeping the
    /// two adjacency lists symmetric.
    ///
    /// Adding an edge already present (by target id) is a no-op. Returns
    /// `false` iff either id is unknown. Self-loops are not rejected.
    pub fn add_student(&mut self, teacher: UserId, student: UserId) -> bool {
        if !self.users.contains_key(&teacher) || !self.users.contains_key(&student) {
            return false;
        }
        let inserted = self
            .users
            .get_mut(&teacher)
            .is_some_and(|u| u.push_student(student));
        if inserted {
            if let Some(s) = self.users.get_mut(&student) {
                s.push_teacher(teacher);
            }
        }
        true
    }

    /// Adds a directed taught-by-edge from `student` to `teacher`; the mirror
    /// of [`add_student`](Self::add_student).
    pub fn add_teacher(&mut self, student: UserId, teacher: UserId) -> bool {
        if !self.users.contains_key(&student) || !self.users.contains_key(&teacher) {
            return false;
        }
        let inserted = self
            .users
            .get_mut(&student)
            .is_some_and(|u| u.push_teacher(teacher));
        if inserted {
            if let Some(t) = self.users.get_mut(&teacher) {
                t.push_student(student);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(n: UserId) -> UserGraph {
        UserGraph::from_users((1..=n).map(User::new))
    }

    #[test]
    fn add_student_is_symmetric() {
        let mut g = graph_of(2);
        assert!(g.add_student(1, 2));
        assert!(g.user(1).unwrap().teaches(2));
        assert!(g.user(2).unwrap().taught_by(1));
    }

    #[test]
    fn add_teacher_is_symmetric() {
        let mut g = graph_of(2);
        assert!(g.add_teacher(1, 2));
        assert!(g.user(1).unwrap().taught_by(2));
        assert!(g.user(2).unwrap().teaches(1));
    }

    #[test]
    fn duplicate_edge_is_a_noop() {
        let mut g = graph_of(2);
        assert!(g.add_student(1, 2));
        assert!(g.add_student(1, 2));
        assert_eq!(g.user(1).unwrap().students(), &[2]);
        assert_eq!(g.user(2).unwrap().teachers(), &[1]);
    }

    #[test]
    fn unknown_endpoint_is_rejected() {
        let mut g = graph_of(1);
        assert!(!g.add_student(1, 9));
        assert!(!g.add_student(9, 1));
        assert!(g.user(1).unwrap().students().is_empty());
    }

    #[test]
    fn self_loop_is_permitted() {
        let mut g = graph_of(1);
        assert!(g.add_student(1, 1));
        assert!(g.user(1).unwrap().teaches(1));
        assert!(g.user(1).unwrap().taught_by(1));
    }

    #[test]
    fn duplicate_id_replaces_without_reordering() {
        let mut g = UserGraph::new();
        g.add_user(User::new(1));
        g.add_user(User::new(2));
        g.add_user(User::with_version(1, 5));
        assert_eq!(g.len(), 2);
        assert_eq!(g.user(1).unwrap().version(), 5);
        assert_eq!(g.user_ids().collect::<Vec<_>>(), vec![1, 2]);
    }
}
