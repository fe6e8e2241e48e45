//! The version-rollout ("infection") policies.
//!
//! Infecting a user means setting its version tag and appending its id to the
//! graph's accumulated infected list. Four policies are offered, from blunt
//! to surgical:
//!
//! - [`UserGraph::infect_component`]: flood the whole component of a root
//! - [`UserGraph::infect_from`]: best-effort, size-bounded flood from a root
//! - [`UserGraph::infect_nearest_size`]: fully infect the component whose
//!   size is closest to a requested count
//! - [`UserGraph::infect_exact`]: infect exactly N users by combining whole
//!   components, via a first-fit probe
//!
//! Unknown roots and unsatisfiable exact targets are normal outcomes reported
//! through the return value, never panics.

use tracing::debug;

use crate::graph::component::UserTree;
use crate::graph::traversal::Bfs;
use crate::graph::UserGraph;
use crate::user::UserId;

impl UserGraph {
    /// Infects the entire connected component of `root` with `version`.
    ///
    /// Returns `false`, mutating nothing, if `root` is unknown.
    pub fn infect_component(&mut self, root: UserId, version: u32) -> bool {
        if self.user(root).is_none() {
            return false;
        }
        let members: Vec<UserId> = Bfs::new(self, [root]).collect();
        debug!(root, version, infected = members.len(), "total infection");
        self.infect_members(&members, version);
        true
    }

    /// Infects at most `limit` users reachable from `root` with `version`.
    ///
    /// The BFS stops as soon as `limit` users have been processed, regardless
    /// of whether the component is exhausted, so a `limit` smaller than the
    /// component size infects a best-effort BFS-order prefix. `limit == 0`
    /// infects nothing. Returns `false`, mutating nothing, if `root` is
    /// unknown.
    pub fn infect_from(&mut self, root: UserId, version: u32, limit: usize) -> bool {
        if self.user(root).is_none() {
            return false;
        }
        let processed: Vec<UserId> = Bfs::new(self, [root]).take(limit).collect();
        debug!(
            root,
            version,
            limit,
            infected = processed.len(),
            "limited infection"
        );
        self.infect_members(&processed, version);
        true
    }

    /// Fully infects the single component whose size is closest to `limit`.
    ///
    /// The component minimizing `|limit − size|` wins; ties go to the earlier
    /// entry of the size-sorted component list. The chosen component is
    /// infected whole, its own size acting as the effective cap. Returns the
    /// chosen component's representative, or `None` for an empty graph.
    pub fn infect_nearest_size(&mut self, version: u32, limit: usize) -> Option<UserId> {
        let trees = self.decompose();
        let mut best: Option<&UserTree> = None;
        let mut best_diff = usize::MAX;
        for tree in &trees {
            let diff = tree.len().abs_diff(limit);
            if diff < best_diff {
                best_diff = diff;
                best = Some(tree);
            }
        }
        let tree = best?;
        let root = tree.representative()?;
        debug!(
            root,
            version,
            limit,
            size = tree.len(),
            "nearest-size infection"
        );
        let members = tree.members().to_vec();
        self.infect_members(&members, version);
        Some(root)
    }

    /// Infects exactly `target` users with `version` by combining whole
    /// components, or infects nothing.
    ///
    /// Components are taken in descending size order and probed first-fit:
    /// at each step the first component whose size does not exceed the
    /// remaining target is committed and the probe continues on the
    /// remainder. The probe does **not** back out of a committed choice, so
    /// it can miss combinations an exhaustive subset-sum search would find;
    /// that non-exhaustive behavior is deliberate and relied upon by
    /// callers. Returns `true` iff the remaining target reached zero; on
    /// `false` no vertex is mutated.
    pub fn infect_exact(&mut self, version: u32, target: usize) -> bool {
        let trees = self.decompose();
        let Some(chosen) = first_fit(&trees, target) else {
            debug!(version, target, "exact infection unsatisfiable");
            return false;
        };
        debug!(
            version,
            target,
            components = chosen.len(),
            "exact infection"
        );
        for tree in chosen {
            let members = tree.members().to_vec();
            self.infect_members(&members, version);
        }
        true
    }

    fn infect_members(&mut self, members: &[UserId], version: u32) {
        for &id in members {
            if let Some(user) = self.user_mut(id) {
                user.set_version(version);
                self.record_infected(id);
            }
        }
    }
}

/// First-fit, depth-first probe for a subsequence of `trees` whose sizes sum
/// to exactly `target`.
///
/// Commits to the first component that fits at each step and never retries an
/// alternative after a commitment; restarting the scan after a commit is
/// redundant because every earlier component was already too large for a
/// target that has only shrunk since.
fn first_fit(trees: &[UserTree], mut target: usize) -> Option<Vec<&UserTree>> {
    let mut chosen = Vec::new();
    let mut candidates: Vec<&UserTree> = trees.iter().collect();
    while target > 0 {
        let fit = candidates.iter().position(|t| t.len() <= target)?;
        let tree = candidates.remove(fit);
        target -= tree.len();
        chosen.push(tree);
    }
    Some(chosen)
}
