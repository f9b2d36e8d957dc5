use std::collections::BTreeSet;

use mazeseed::{
    Generator, coordinate, generate_maze, generate_maze_with, maze::grid::candidate_passages,
    walls_of,
};
use proptest::prelude::*;

fn any_generator() -> impl Strategy<Value = Generator> {
    prop_oneof![Just(Generator::BranchPoint), Just(Generator::RoomGrowth)]
}

proptest! {
    #[test]
    fn same_seed_same_maze(n in 2u32..=30, seed in any::<i32>(), generator in any_generator()) {
        let first = generate_maze_with(generator, n, Some(i64::from(seed))).unwrap();
        let second = generate_maze_with(generator, n, Some(i64::from(seed))).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_connection_has_length_one(n in 2u32..=30, seed in any::<i32>(), generator in any_generator()) {
        let graph = generate_maze_with(generator, n, Some(i64::from(seed))).unwrap();
        for e in graph.edges() {
            let (a, b) = (e.a(), e.b());
            let length = f64::from((b.x - a.x).pow(2) + (b.y - a.y).pow(2)).sqrt();
            prop_assert_eq!(length, 1.0);
        }
    }

    #[test]
    fn maze_is_a_spanning_tree(n in 2u32..=30, seed in any::<i32>(), generator in any_generator()) {
        let graph = generate_maze_with(generator, n, Some(i64::from(seed))).unwrap();
        prop_assert_eq!(graph.len() as u32, n * n - 1);
        prop_assert!(graph.is_spanning_tree());
    }

    #[test]
    fn opposite_corners_share_one_component(n in 2u32..=30, seed in any::<i32>()) {
        let graph = generate_maze(n, Some(i64::from(seed))).unwrap();
        let last = n as i32 - 1;
        let from_origin = graph.component_of(coordinate(0, 0));
        let from_corner = graph.component_of(coordinate(last, last));
        prop_assert_eq!(&from_origin, &from_corner);
        prop_assert_eq!(from_origin.len() as u32, n * n);
    }

    #[test]
    fn walls_complement_connections(n in 2u32..=30, seed in any::<i32>(), generator in any_generator()) {
        let graph = generate_maze_with(generator, n, Some(i64::from(seed))).unwrap();
        let walls = walls_of(n, &graph);

        let blocked = walls.blocked_passages().collect::<BTreeSet<_>>();
        let open = graph.edges().copied().collect::<BTreeSet<_>>();
        let all = candidate_passages(n).collect::<BTreeSet<_>>();

        prop_assert!(blocked.is_disjoint(&open));
        prop_assert_eq!(blocked.union(&open).copied().collect::<BTreeSet<_>>(), all);
        // 4n perimeter segments plus one interior segment per blocked passage
        prop_assert_eq!(walls.len(), 4 * n as usize + blocked.len());
    }
}

#[test]
fn two_by_two_maze_connects_every_corner() {
    let graph = generate_maze(2, Some(42)).unwrap();
    assert_eq!(graph.len(), 3);
    let corners = [(0, 0), (1, 0), (0, 1), (1, 1)].map(|(x, y)| coordinate(x, y));
    for from in corners {
        let reached = graph.component_of(from);
        assert!(corners.iter().all(|to| reached.contains(to)));
    }
}
