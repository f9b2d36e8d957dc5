use std::collections::HashSet;

use crate::{
    error::MazeError,
    maze::{ConnectivityGraph, Direction, Registry, grid::neighbors, walls_of},
    render::render_ascii,
    rng::Lcg,
};

/// Candidate order for this policy: north, south, east, west.
const CANDIDATE_ORDER: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Carves passages from one random starting room, depth first.
///
/// From the room on top of the stack, connect a random unvisited neighbor and move there.
/// When a room has no unvisited neighbors left, step back to the room it was reached from.
pub fn room_growth(size: u32, seed: i64) -> Result<ConnectivityGraph, MazeError> {
    let n = size as i32;
    let rooms = size as usize * size as usize;
    let mut registry = Registry::with_grid_capacity(size);
    let mut rng = Lcg::new(seed);

    // Room index i maps to (i mod n, i div n)
    let start_index = rng.next_index(rooms) as i32;
    let start = registry.coordinate(start_index % n, start_index / n);
    tracing::debug!(
        "[room growth] starting from room {}",
        registry.resolve(start)
    );

    let mut visited = HashSet::from([start]);
    let mut passages = Vec::with_capacity(rooms.saturating_sub(1));
    // The stack will keep only connected rooms
    let mut stack = vec![start];

    while let Some(&room) = stack.last() {
        let candidates = neighbors(registry.resolve(room), &CANDIDATE_ORDER)
            .filter(|coord| coord.is_room(size))
            .map(|coord| registry.intern(coord))
            .filter(|id| !visited.contains(id))
            .collect::<Vec<_>>();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let pick = rng.next_index(candidates.len());
        let &next = candidates
            .get(pick)
            .ok_or(MazeError::CandidateOutOfRange {
                index: pick,
                len: candidates.len(),
            })?;

        passages.push(registry.edge(room, next));
        visited.insert(next);
        // Carve onward from the new room; this room stays below it to be revisited
        stack.push(next);
    }

    let graph = ConnectivityGraph::from_edges(
        size,
        passages.iter().map(|&id| registry.resolve_edge(id)),
    );

    if visited.len() != rooms {
        tracing::error!(
            "[room growth] backtracked to the start with {} rooms unvisited",
            rooms - visited.len()
        );
        return Err(MazeError::FrontierExhausted {
            remaining: rooms - visited.len(),
            partial: render_ascii(&walls_of(size, &graph)),
        });
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{coordinate, edge};

    #[test]
    fn test_two_by_two_fixture() {
        let graph = room_growth(2, 42).unwrap();
        assert_eq!(
            graph.edges().copied().collect::<Vec<_>>(),
            vec![
                edge(coordinate(0, 0), coordinate(1, 0)),
                edge(coordinate(1, 0), coordinate(1, 1)),
                edge(coordinate(0, 1), coordinate(1, 1)),
            ]
        );
    }

    #[test]
    fn test_three_by_three_fixture() {
        let graph = room_growth(3, 7).unwrap();
        assert_eq!(
            graph.edges().copied().collect::<Vec<_>>(),
            vec![
                edge(coordinate(0, 0), coordinate(1, 0)),
                edge(coordinate(0, 0), coordinate(0, 1)),
                edge(coordinate(1, 0), coordinate(2, 0)),
                edge(coordinate(2, 0), coordinate(2, 1)),
                edge(coordinate(0, 1), coordinate(0, 2)),
                edge(coordinate(1, 1), coordinate(1, 2)),
                edge(coordinate(0, 2), coordinate(1, 2)),
                edge(coordinate(1, 2), coordinate(2, 2)),
            ]
        );
    }

    #[test]
    fn test_large_grid_does_not_recurse() {
        let graph = room_growth(200, 99).unwrap();
        assert!(graph.is_spanning_tree());
    }
}
