use std::collections::BTreeSet;
use std::fmt;

use super::graph::ConnectivityGraph;
use super::grid::{Coordinate, Edge, candidate_walls};

/// The walls of a maze, as unit segments of the `(n+1)`×`(n+1)` lattice that bounds the rooms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallSet {
    size: u32,
    segments: BTreeSet<Edge>,
}

impl WallSet {
    pub(crate) fn from_segments(size: u32, segments: impl IntoIterator<Item = Edge>) -> Self {
        WallSet {
            size,
            segments: segments.into_iter().collect(),
        }
    }

    /// Number of rooms along one side of the grid the walls enclose.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.segments.iter()
    }

    pub fn contains(&self, segment: &Edge) -> bool {
        self.segments.contains(segment)
    }

    /// Checks if adjacent rooms `a` and `b` are divided by a wall.
    /// Coordinates that are not adjacent are always considered divided.
    pub fn separates(&self, a: Coordinate, b: Coordinate) -> bool {
        Edge::new(a, b)
            .separating_wall()
            .is_none_or(|wall| self.segments.contains(&wall))
    }

    /// The internal walls, expressed as the pairs of rooms they separate.
    pub fn blocked_passages(&self) -> impl Iterator<Item = Edge> + '_ {
        self.segments
            .iter()
            .filter_map(|wall| wall.separated_rooms(self.size))
    }
}

impl fmt::Display for WallSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::render::render_ascii(self))
    }
}

/// Derives the walls of a maze from its connections.
///
/// Starts from every unit segment of the lattice, perimeter included, and removes each segment
/// that lies between two connected rooms. Connections that leave the `size`×`size` grid open
/// nothing, so the perimeter always survives.
pub fn walls_of(size: u32, graph: &ConnectivityGraph) -> WallSet {
    if graph.size() != size {
        tracing::debug!(
            "[walls] deriving walls for size {} from a graph of size {}",
            size,
            graph.size()
        );
    }
    let open = graph
        .edges()
        .filter(|e| e.a().is_room(size) && e.b().is_room(size))
        .filter_map(Edge::separating_wall)
        .collect::<BTreeSet<_>>();
    WallSet::from_segments(
        size,
        candidate_walls(size).filter(|segment| !open.contains(segment)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::grid::{candidate_passages, coordinate, edge, perimeter_walls};

    fn small_maze() -> ConnectivityGraph {
        ConnectivityGraph::from_edges(
            2,
            [
                edge(coordinate(0, 0), coordinate(1, 0)),
                edge(coordinate(0, 0), coordinate(0, 1)),
                edge(coordinate(0, 1), coordinate(1, 1)),
            ],
        )
    }

    #[test]
    fn test_walls_of_small_maze() {
        let walls = walls_of(2, &small_maze());
        // 12 lattice segments, 3 opened
        assert_eq!(walls.len(), 9);
        assert!(walls.contains(&edge(coordinate(1, 1), coordinate(2, 1))));
        assert!(walls.separates(coordinate(1, 0), coordinate(1, 1)));
        assert!(!walls.separates(coordinate(0, 0), coordinate(1, 0)));
        assert!(walls.separates(coordinate(0, 0), coordinate(1, 1)));
        assert_eq!(
            walls.blocked_passages().collect::<Vec<_>>(),
            vec![edge(coordinate(1, 0), coordinate(1, 1))]
        );
    }

    #[test]
    fn test_perimeter_always_present() {
        let walls = walls_of(3, &ConnectivityGraph::from_edges(3, candidate_passages(3)));
        assert_eq!(walls.len(), 12);
        assert!(perimeter_walls(3).all(|w| walls.contains(&w)));
    }

    #[test]
    fn test_off_grid_connections_keep_perimeter() {
        let leaving = ConnectivityGraph::from_edges(2, [edge(coordinate(1, 0), coordinate(2, 0))]);
        let walls = walls_of(2, &leaving);
        assert!(walls.contains(&edge(coordinate(2, 0), coordinate(2, 1))));
        assert!(perimeter_walls(2).all(|w| walls.contains(&w)));
        assert_eq!(walls.len(), 12);

        // A 3x3 maze read as 2x2: only its connections inside the 2x2 corner count
        let larger = ConnectivityGraph::from_edges(3, candidate_passages(3));
        let walls = walls_of(2, &larger);
        assert!(perimeter_walls(2).all(|w| walls.contains(&w)));
        assert_eq!(walls.len(), 8);
        assert_eq!(walls.blocked_passages().count(), 0);
    }

    #[test]
    fn test_empty_graph_walls_everything() {
        let walls = walls_of(4, &ConnectivityGraph::from_edges(4, std::iter::empty()));
        assert_eq!(walls.len(), 2 * 4 * 5);
        assert_eq!(walls.blocked_passages().count(), candidate_passages(4).count());
    }
}
