use std::cmp::Ordering;
use std::fmt;

/// A point on the grid. Rooms live in `[0, n)²`; wall lattice vertices in `[0, n]²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const fn new(x: i32, y: i32) -> Self {
        Coordinate { x, y }
    }

    /// The coordinate one step away in the given direction.
    pub fn step(self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.offset();
        Coordinate::new(self.x + dx, self.y + dy)
    }

    /// Checks if the coordinate is a room of a `size`×`size` grid.
    pub fn is_room(self, size: u32) -> bool {
        let n = size as i32;
        (0..n).contains(&self.x) && (0..n).contains(&self.y)
    }

    /// Checks if the coordinate lies on the outer edge of the `(size+1)`×`(size+1)` lattice.
    pub fn is_perimeter(self, size: u32) -> bool {
        let n = size as i32;
        self.x == 0 || self.y == 0 || self.x == n || self.y == n
    }

    fn distance_squared(self, other: Coordinate) -> i64 {
        let dx = i64::from(other.x) - i64::from(self.x);
        let dy = i64::from(other.y) - i64::from(self.y);
        dx * dx + dy * dy
    }
}

/// Row-major: first by `y`, then by `x`.
impl Ord for Coordinate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Coordinate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The canonical coordinate for `(x, y)`.
pub fn coordinate(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise from north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `y` grows southwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Get the four cardinal neighbors of a coordinate, in the given direction order.
/// No bounds filtering happens here; callers decide which neighbors exist.
pub fn neighbors(coord: Coordinate, order: &[Direction]) -> impl Iterator<Item = Coordinate> {
    order.iter().map(move |&dir| coord.step(dir))
}

/// An undirected edge between two coordinates, stored in ascending row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    a: Coordinate,
    b: Coordinate,
}

impl Edge {
    /// Creates the canonical edge between `p1` and `p2`. Argument order does not matter.
    pub fn new(p1: Coordinate, p2: Coordinate) -> Self {
        if p2 < p1 {
            Edge { a: p2, b: p1 }
        } else {
            Edge { a: p1, b: p2 }
        }
    }

    /// The smaller endpoint.
    pub fn a(&self) -> Coordinate {
        self.a
    }

    /// The larger endpoint.
    pub fn b(&self) -> Coordinate {
        self.b
    }

    /// Checks if the endpoints are exactly one step apart.
    pub fn is_unit(&self) -> bool {
        self.a.distance_squared(self.b) == 1
    }

    /// For an edge between two adjacent rooms, the lattice segment that would wall them off.
    ///
    /// - Rooms `(x,y)` and `(x+1,y)` share the segment `(x+1,y)-(x+1,y+1)`.
    /// - Rooms `(x,y)` and `(x,y+1)` share the segment `(x,y+1)-(x+1,y+1)`.
    ///
    /// Returns `None` if the endpoints are not grid-adjacent.
    pub fn separating_wall(&self) -> Option<Edge> {
        let (a, b) = (self.a, self.b);
        if !self.is_unit() {
            return None;
        }
        // a < b in row-major order, so b is either east of a or south of a
        let wall = if a.y == b.y {
            Edge::new(coordinate(b.x, b.y), coordinate(b.x, b.y + 1))
        } else {
            Edge::new(coordinate(b.x, b.y), coordinate(b.x + 1, b.y))
        };
        Some(wall)
    }

    /// For a lattice segment, the pair of rooms it separates inside a `size`×`size` grid.
    ///
    /// Returns `None` for perimeter segments, for segments outside the grid, and for
    /// anything that is not a unit segment.
    pub fn separated_rooms(&self, size: u32) -> Option<Edge> {
        let (a, b) = (self.a, self.b);
        if !self.is_unit() {
            return None;
        }
        let rooms = if a.x == b.x {
            // Vertical segment at column a.x, between rooms to its west and east
            Edge::new(coordinate(a.x - 1, a.y), coordinate(a.x, a.y))
        } else {
            // Horizontal segment at row a.y, between rooms to its north and south
            Edge::new(coordinate(a.x, a.y - 1), coordinate(a.x, a.y))
        };
        (rooms.a.is_room(size) && rooms.b.is_room(size)).then_some(rooms)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.a, self.b)
    }
}

/// The canonical edge between two coordinates.
pub fn edge(p1: Coordinate, p2: Coordinate) -> Edge {
    Edge::new(p1, p2)
}

/// All edges between grid-adjacent rooms of a `size`×`size` grid, in row-major order.
pub fn candidate_passages(size: u32) -> impl Iterator<Item = Edge> {
    let n = size as i32;
    (0..n)
        .flat_map(move |y| (0..n).map(move |x| (x, y)))
        .flat_map(move |(x, y)| {
            [
                (x + 1 < n).then(|| edge(coordinate(x, y), coordinate(x + 1, y))),
                (y + 1 < n).then(|| edge(coordinate(x, y), coordinate(x, y + 1))),
            ]
        })
        .flatten()
}

/// All unit segments of the `(size+1)`×`(size+1)` wall lattice, perimeter included.
pub fn candidate_walls(size: u32) -> impl Iterator<Item = Edge> {
    let n = size as i32;
    (0..=n)
        .flat_map(move |y| (0..=n).map(move |x| (x, y)))
        .flat_map(move |(x, y)| {
            [
                (x < n).then(|| edge(coordinate(x, y), coordinate(x + 1, y))),
                (y < n).then(|| edge(coordinate(x, y), coordinate(x, y + 1))),
            ]
        })
        .flatten()
}

/// The 4n segments bounding the grid.
pub fn perimeter_walls(size: u32) -> impl Iterator<Item = Edge> {
    candidate_walls(size).filter(move |wall| {
        let (a, b) = (wall.a(), wall.b());
        let n = size as i32;
        (a.y == b.y && (a.y == 0 || a.y == n)) || (a.x == b.x && (a.x == 0 || a.x == n))
    })
}
