//! End-to-end rollout scenarios over hand-built graphs.

use contagion::{User, UserGraph, UserId};

/// Components of sizes 5 ({1..5}), 3 ({6..8}) and 2 ({9,10}), built as
/// teaching chains.
fn sized_5_3_2() -> UserGraph {
    let mut g = UserGraph::from_users((1..=10).map(User::new));
    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (6, 7), (7, 8), (9, 10)] {
        assert!(g.add_student(a, b));
    }
    g
}

fn sorted(ids: &[UserId]) -> Vec<UserId> {
    let mut ids = ids.to_vec();
    ids.sort_unstable();
    ids
}

#[test]
fn exact_target_five_takes_the_largest_component_alone() {
    let mut g = sized_5_3_2();
    assert!(g.infect_exact(7, 5));
    assert_eq!(sorted(g.infected()), vec![1, 2, 3, 4, 5]);
    for id in 1..=5 {
        assert_eq!(g.user(id).unwrap().version(), 7);
    }
    for id in 6..=10 {
        assert_eq!(g.user(id).unwrap().version(), 0);
    }
}

#[test]
fn exact_target_eight_combines_five_and_three() {
    let mut g = sized_5_3_2();
    assert!(g.infect_exact(7, 8));
    assert_eq!(sorted(g.infected()), (1..=8).collect::<Vec<_>>());
}

#[test]
fn exact_target_four_fails_without_backtracking() {
    // 5 does not fit; 3 is committed leaving a remainder of 1; nothing of
    // size <= 1 remains and the probe does not reconsider the size-2
    // component. A target of 4 is therefore unsatisfiable by this policy
    // even though 2 + 2 does not exist and 3 + ... never will; the miss is
    // contract, not bug.
    let mut g = sized_5_3_2();
    assert!(!g.infect_exact(7, 4));
    assert!(g.infected().is_empty());
    assert!(g.users().all(|u| u.version() == 0));
}

#[test]
fn exact_target_ten_takes_everything() {
    let mut g = sized_5_3_2();
    assert!(g.infect_exact(7, 10));
    assert_eq!(sorted(g.infected()), (1..=10).collect::<Vec<_>>());
}

#[test]
fn nearest_size_one_selects_an_isolated_vertex() {
    let mut g = sized_5_3_2();
    g.add_user(User::new(11));
    let root = g.infect_nearest_size(3, 1);
    assert_eq!(root, Some(11));
    assert_eq!(g.infected(), &[11]);
    assert_eq!(g.user(11).unwrap().version(), 3);
}

#[test]
fn limited_infection_stays_within_the_reachable_set() {
    let mut g = sized_5_3_2();
    assert!(g.infect_from(6, 2, 100));
    assert_eq!(sorted(g.infected()), vec![6, 7, 8]);
    assert_eq!(g.user(1).unwrap().version(), 0);
    assert_eq!(g.user(9).unwrap().version(), 0);
}

#[test]
fn reinfecting_a_component_appends_the_same_ids_again() {
    let mut g = sized_5_3_2();
    assert!(g.infect_component(9, 1));
    let first = sorted(g.infected());
    assert_eq!(first, vec![9, 10]);

    // Second pass from the other member, with a generous cap: the same two
    // ids are appended again, nothing new appears.
    assert!(g.infect_from(10, 2, 100));
    assert_eq!(g.infected().len(), 4);
    assert_eq!(sorted(&g.infected()[2..]), vec![9, 10]);
    assert_eq!(g.user(9).unwrap().version(), 2);
    assert_eq!(g.user(10).unwrap().version(), 2);
}

#[test]
fn edge_symmetry_survives_duplicate_additions() {
    let mut g = UserGraph::from_users((1..=3).map(User::new));
    assert!(g.add_student(1, 2));
    assert!(g.add_student(1, 2));
    assert!(g.add_teacher(2, 1)); // same edge, stated from the other side
    assert!(g.add_teacher(3, 1));

    for user in g.users() {
        for &s in user.students() {
            assert!(g.user(s).unwrap().taught_by(user.id()));
        }
        for &t in user.teachers() {
            assert!(g.user(t).unwrap().teaches(user.id()));
        }
    }
    assert_eq!(g.user(1).unwrap().students(), &[2, 3]);
    assert_eq!(g.user(2).unwrap().teachers(), &[1]);
}

#[test]
fn snapshot_reflects_a_finished_rollout() {
    let mut g = sized_5_3_2();
    assert!(g.infect_exact(7, 2));
    let snap = g.snapshot("rollout of version 7");
    assert_eq!(snap.title, "rollout of version 7");
    assert_eq!(snap.users.len(), 10);
    assert_eq!(snap.edges.len(), 7);
    assert_eq!(sorted(&snap.infected), vec![9, 10]);
    assert!(snap
        .users
        .iter()
        .all(|u| u.infected == (u.id == 9 || u.id == 10)));
}
