use std::collections::HashSet;

use crate::{
    error::MazeError,
    maze::{
        ConnectivityGraph, Direction, Registry, WallSet, coordinate,
        grid::{candidate_passages, neighbors, perimeter_walls},
    },
    render::render_ascii,
    rng::Lcg,
};

/// Grows a tree of walls on the `(n+1)`×`(n+1)` lattice, starting from the perimeter, and
/// returns the room connections it leaves open.
///
/// Every perimeter vertex starts as a branch point and every interior vertex as unconnected.
/// Each round picks a random branch point and extends a wall to one of its unconnected
/// neighbors. Because walls only ever reach vertices that were unconnected, the walls form a
/// tree hanging off the perimeter, and the open passages between rooms form a spanning tree.
pub fn branch_point_growth(size: u32, seed: i64) -> Result<ConnectivityGraph, MazeError> {
    let n = size as i32;
    let mut registry = Registry::with_grid_capacity(size);
    let mut rng = Lcg::new(seed);

    // Perimeter vertices, row-major
    let mut frontier = (0..=n)
        .flat_map(|y| (0..=n).map(move |x| coordinate(x, y)))
        .filter(|coord| coord.is_perimeter(size))
        .map(|coord| registry.intern(coord))
        .collect::<Vec<_>>();

    let mut unconnected = (1..n)
        .flat_map(|y| (1..n).map(move |x| (x, y)))
        .map(|(x, y)| registry.coordinate(x, y))
        .collect::<HashSet<_>>();

    let mut walls = perimeter_walls(size)
        .map(|wall| {
            let (a, b) = (registry.intern(wall.a()), registry.intern(wall.b()));
            registry.edge(a, b)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        "[branch point] {} branch points, {} unconnected vertices",
        frontier.len(),
        unconnected.len()
    );

    while !unconnected.is_empty() {
        if frontier.is_empty() {
            let partial = WallSet::from_segments(
                size,
                walls.iter().map(|&id| registry.resolve_edge(id)),
            );
            tracing::error!(
                "[branch point] frontier exhausted with {} vertices unconnected",
                unconnected.len()
            );
            return Err(MazeError::FrontierExhausted {
                remaining: unconnected.len(),
                partial: render_ascii(&partial),
            });
        }

        let idx = rng.next_index(frontier.len());
        let branch = frontier[idx];

        let candidates = neighbors(registry.resolve(branch), &Direction::ALL)
            .filter_map(|coord| registry.find(coord))
            .filter(|id| unconnected.contains(id))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            // Exhausted branch point
            frontier.remove(idx);
            continue;
        }

        let pick = rng.next_index(candidates.len());
        let &next = candidates
            .get(pick)
            .ok_or(MazeError::CandidateOutOfRange {
                index: pick,
                len: candidates.len(),
            })?;

        walls.push(registry.edge(branch, next));
        unconnected.remove(&next);
        frontier.push(next);
        if candidates.len() == 1 {
            // The only candidate was just consumed
            frontier.remove(idx);
        }
    }

    tracing::debug!(
        "[branch point] wall tree complete with {} segments ({} coordinates, {} edges interned)",
        walls.len(),
        registry.num_coordinates(),
        registry.num_edges()
    );

    let walls = WallSet::from_segments(size, walls.iter().map(|&id| registry.resolve_edge(id)));
    let passages = candidate_passages(size).filter(|passage| {
        passage
            .separating_wall()
            .is_some_and(|wall| !walls.contains(&wall))
    });
    Ok(ConnectivityGraph::from_edges(size, passages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{edge, walls_of};

    #[test]
    fn test_three_by_three_fixture() {
        let graph = branch_point_growth(3, 7).unwrap();
        let expected = vec![
            edge(coordinate(0, 0), coordinate(0, 1)),
            edge(coordinate(1, 0), coordinate(2, 0)),
            edge(coordinate(2, 0), coordinate(2, 1)),
            edge(coordinate(0, 1), coordinate(1, 1)),
            edge(coordinate(0, 1), coordinate(0, 2)),
            edge(coordinate(1, 1), coordinate(2, 1)),
            edge(coordinate(1, 1), coordinate(1, 2)),
            edge(coordinate(1, 2), coordinate(2, 2)),
        ];
        assert_eq!(graph.edges().copied().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_two_by_two_seeds() {
        let graph = branch_point_growth(2, 0).unwrap();
        assert!(graph.connects(coordinate(1, 0), coordinate(1, 1)));
        assert!(!graph.connects(coordinate(0, 1), coordinate(1, 1)));
        assert_eq!(graph.len(), 3);
    }

    #[test]
    fn test_wall_tree_matches_derived_walls() {
        for seed in [-3, 0, 42, 1720301682563] {
            let graph = branch_point_growth(5, seed).unwrap();
            let walls = walls_of(5, &graph);
            // 4n perimeter + (n-1)^2 interior segments
            assert_eq!(walls.len(), 4 * 5 + 16);
            assert!(graph.is_spanning_tree());
        }
    }

    #[test]
    fn test_deterministic() {
        for n in 2..12 {
            assert_eq!(
                branch_point_growth(n, 1234).unwrap(),
                branch_point_growth(n, 1234).unwrap()
            );
        }
    }
}
