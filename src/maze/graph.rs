use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::grid::{Coordinate, Direction, Edge, coordinate};

/// The connections between rooms of a maze.
///
/// Stored both as a set of edges and as an adjacency map from each room to the rooms it opens
/// onto. Both views are ordered row-major, so two graphs with the same edges compare equal and
/// iterate identically. A graph is never modified after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectivityGraph {
    size: u32,
    edges: BTreeSet<Edge>,
    adjacency: BTreeMap<Coordinate, Vec<Coordinate>>,
}

impl ConnectivityGraph {
    /// Builds a graph over a `size`×`size` grid. Every room gets an adjacency entry, even
    /// when it has no connections.
    pub fn from_edges(size: u32, edges: impl IntoIterator<Item = Edge>) -> Self {
        let edges = edges.into_iter().collect::<BTreeSet<_>>();
        let n = size as i32;
        let mut adjacency = (0..n)
            .flat_map(|y| (0..n).map(move |x| (coordinate(x, y), Vec::new())))
            .collect::<BTreeMap<_, _>>();
        for e in &edges {
            adjacency.entry(e.a()).or_default().push(e.b());
            adjacency.entry(e.b()).or_default().push(e.a());
        }
        adjacency.values_mut().for_each(|rooms| rooms.sort());
        ConnectivityGraph {
            size,
            edges,
            adjacency,
        }
    }

    /// Number of rooms along one side of the grid.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of connections.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }

    /// Checks if rooms `a` and `b` are directly connected.
    pub fn connects(&self, a: Coordinate, b: Coordinate) -> bool {
        self.edges.contains(&Edge::new(a, b))
    }

    /// Rooms directly reachable from `room`, in row-major order.
    pub fn neighbors(&self, room: Coordinate) -> &[Coordinate] {
        self.adjacency.get(&room).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The directions in which `room` has a door, clockwise from north.
    pub fn doors(&self, room: Coordinate) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.connects(room, room.step(dir)))
            .collect()
    }

    /// The adjacency map view: every room mapped to the rooms it connects to.
    pub fn adjacency(&self) -> &BTreeMap<Coordinate, Vec<Coordinate>> {
        &self.adjacency
    }

    /// All rooms reachable from `start` by following connections, `start` included.
    pub fn component_of(&self, start: Coordinate) -> HashSet<Coordinate> {
        let mut seen = HashSet::from([start]);
        let mut stack = vec![start];
        while let Some(room) = stack.pop() {
            for &next in self.neighbors(room) {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Checks that the graph connects all `size²` rooms with exactly `size² - 1` unit edges
    /// that stay inside the grid, which makes it a spanning tree.
    pub fn is_spanning_tree(&self) -> bool {
        let rooms = self.size as usize * self.size as usize;
        if self.edges.len() + 1 != rooms {
            return false;
        }
        let in_grid = self
            .edges
            .iter()
            .all(|e| e.is_unit() && e.a().is_room(self.size) && e.b().is_room(self.size));
        in_grid && self.component_of(coordinate(0, 0)).len() == rooms
    }
}
