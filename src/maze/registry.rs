use std::collections::HashMap;

use super::grid::{Coordinate, Edge};

/// Handle to a coordinate interned in a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoordId(u32);

/// Handle to an edge interned in a [`Registry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(u32);

impl CoordId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl EdgeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interning arena for coordinates and edges.
///
/// Each distinct `(x, y)` gets exactly one [`CoordId`], and each unordered pair of coordinates
/// exactly one [`EdgeId`], so handle equality is value equality. Entries are append-only and
/// live as long as the registry. A registry is owned by whoever runs a generation; nothing is
/// shared between runs.
#[derive(Debug, Default)]
pub struct Registry {
    coords: Vec<Coordinate>,
    coord_ids: HashMap<Coordinate, CoordId>,
    edges: Vec<(CoordId, CoordId)>,
    edge_ids: HashMap<(CoordId, CoordId), EdgeId>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Creates a registry with room for the coordinates and edges of a `size`×`size` lattice.
    pub fn with_grid_capacity(size: u32) -> Self {
        let vertices = (size as usize + 1).pow(2);
        Registry {
            coords: Vec::with_capacity(vertices),
            coord_ids: HashMap::with_capacity(vertices),
            edges: Vec::with_capacity(vertices * 2),
            edge_ids: HashMap::with_capacity(vertices * 2),
        }
    }

    /// Returns the handle for `(x, y)`, interning it on first use.
    pub fn coordinate(&mut self, x: i32, y: i32) -> CoordId {
        self.intern(Coordinate::new(x, y))
    }

    /// Returns the handle for a coordinate value, interning it on first use.
    pub fn intern(&mut self, coord: Coordinate) -> CoordId {
        if let Some(&id) = self.coord_ids.get(&coord) {
            return id;
        }
        let id = CoordId(self.coords.len() as u32);
        self.coords.push(coord);
        self.coord_ids.insert(coord, id);
        id
    }

    /// Looks up a coordinate without interning it.
    pub fn find(&self, coord: Coordinate) -> Option<CoordId> {
        self.coord_ids.get(&coord).copied()
    }

    /// Returns the handle for the undirected edge between `p1` and `p2`.
    /// `edge(a, b)` and `edge(b, a)` always return the same handle.
    pub fn edge(&mut self, p1: CoordId, p2: CoordId) -> EdgeId {
        // Normalize to row-major ascending order before interning
        let key = if self.resolve(p2) < self.resolve(p1) {
            (p2, p1)
        } else {
            (p1, p2)
        };
        if let Some(&id) = self.edge_ids.get(&key) {
            return id;
        }
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(key);
        self.edge_ids.insert(key, id);
        id
    }

    pub fn resolve(&self, id: CoordId) -> Coordinate {
        self.coords[id.index()]
    }

    /// The canonical endpoints of an interned edge, smaller first.
    pub fn endpoints(&self, id: EdgeId) -> (CoordId, CoordId) {
        self.edges[id.index()]
    }

    pub fn resolve_edge(&self, id: EdgeId) -> Edge {
        let (a, b) = self.endpoints(id);
        Edge::new(self.resolve(a), self.resolve(b))
    }

    pub fn num_coordinates(&self) -> usize {
        self.coords.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }
}
