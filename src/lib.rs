//! # `contagion` - Staged Version Rollout over a Social Graph
//!
//! Models a social graph of teacher/student relationships and propagates a
//! version tag ("infection") across it. Rolling a site version out to a
//! coaching community is awkward because classrooms should not straddle
//! versions: this crate keeps whole connected components on one version
//! wherever the rollout policy allows it.
//!
//! ## Rollout Policies
//!
//! - **Total infection** ([`UserGraph::infect_component`]): flood the entire
//!   connected component of a chosen user.
//! - **Limited infection** ([`UserGraph::infect_from`]): best-effort flood
//!   from a chosen user, capped at a processed-vertex count; may split a
//!   component when the cap is smaller than it.
//! - **Nearest-size infection** ([`UserGraph::infect_nearest_size`]): fully
//!   infect the single component whose size is closest to a requested count.
//! - **Exact infection** ([`UserGraph::infect_exact`]): infect exactly N
//!   users by combining whole components, using a deterministic first-fit
//!   probe over the components sorted by descending size. The probe does not
//!   backtrack, so it can miss combinations an exhaustive search would find;
//!   callers rely on that being deterministic rather than clever.
//!
//! All policies run single-threaded to completion. Traversal state lives in
//! per-pass mark maps rather than on the vertices, so shared references
//! support any number of overlapping read-only traversals, and `&mut` access
//! serializes mutation the usual way.
//!
//! ## Example
//!
//! ```rust
//! use contagion::{User, UserGraph};
//!
//! let mut graph = UserGraph::from_users((1..=4).map(User::new));
//! graph.add_student(1, 2); // user 1 teaches user 2
//! graph.add_student(2, 3);
//!
//! // Users 1-3 form one component; user 4 is isolated.
//! assert!(graph.infect_exact(7, 3));
//! assert_eq!(graph.user(2).unwrap().version(), 7);
//! assert_eq!(graph.user(4).unwrap().version(), 0);
//!
//! // Hand the data to a renderer.
//! let snapshot = graph.snapshot("after rollout");
//! assert_eq!(snapshot.infected.len(), 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod graph;
pub mod user;
pub mod view;

pub use graph::{Bfs, Mark, UserGraph, UserTree};
pub use user::{User, UserId};
pub use view::{EdgeView, GraphSnapshot, UserView};
