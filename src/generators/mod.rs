mod branch_point;
mod room_growth;

use std::time::{SystemTime, UNIX_EPOCH};

use branch_point::branch_point_growth;
use room_growth::room_growth;

use crate::{
    error::MazeError,
    maze::{ConnectivityGraph, validate_size},
};

/// Get the seed to generate from, falling back to wall-clock milliseconds when none is given.
pub fn resolve_seed(seed: Option<i64>) -> i64 {
    match seed {
        Some(s) => s,
        None => SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as i64)
            .unwrap_or_default(),
    }
}

/// Maze generation policies. Both produce a spanning tree over the grid, but they produce
/// different mazes from the same seed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Grows walls inward from the perimeter, one random branch point at a time.
    #[default]
    BranchPoint,
    /// Grows passages outward from one random room, backtracking when stuck.
    RoomGrowth,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::BranchPoint => write!(f, "Perimeter Branch-Point Growth"),
            Generator::RoomGrowth => write!(f, "Single-Room Backtracking Growth"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "branch" | "branch-point" => Ok(Generator::BranchPoint),
            "room" | "room-growth" => Ok(Generator::RoomGrowth),
            other => Err(format!("unknown generator '{other}'")),
        }
    }
}

/// Generates a maze on a `size`×`size` grid with the canonical branch-point policy.
///
/// The same size and seed always produce the same graph. Without a seed, the current time
/// is used, so only that call site is non-deterministic.
pub fn generate_maze(size: u32, seed: Option<i64>) -> Result<ConnectivityGraph, MazeError> {
    generate_maze_with(Generator::BranchPoint, size, seed)
}

/// Generates a maze with the given policy.
pub fn generate_maze_with(
    generator: Generator,
    size: u32,
    seed: Option<i64>,
) -> Result<ConnectivityGraph, MazeError> {
    let size = validate_size(size)?;
    let seed = resolve_seed(seed);
    tracing::info!(
        "[generate] {} on a {}x{} grid with seed {}",
        generator,
        size,
        size,
        seed
    );

    let graph = match generator {
        Generator::BranchPoint => branch_point_growth(size, seed)?,
        Generator::RoomGrowth => room_growth(size, seed)?,
    };

    tracing::info!("[generate] done, {} connections", graph.len());
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::{coordinate, edge};

    #[test]
    fn test_two_by_two_fixture() {
        let graph = generate_maze(2, Some(42)).unwrap();
        assert_eq!(
            graph.edges().copied().collect::<Vec<_>>(),
            vec![
                edge(coordinate(0, 0), coordinate(1, 0)),
                edge(coordinate(0, 0), coordinate(0, 1)),
                edge(coordinate(0, 1), coordinate(1, 1)),
            ]
        );
        for corner in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            let reached = graph.component_of(coordinate(corner.0, corner.1));
            assert_eq!(reached.len(), 4);
        }
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        for generator in [Generator::BranchPoint, Generator::RoomGrowth] {
            assert_eq!(
                generate_maze_with(generator, 1, Some(0)),
                Err(MazeError::InvalidSize { size: 1 })
            );
            assert_eq!(
                generate_maze_with(generator, 0, Some(0)),
                Err(MazeError::InvalidSize { size: 0 })
            );
        }
    }

    #[test]
    fn test_generators_differ_but_both_span() {
        let a = generate_maze_with(Generator::BranchPoint, 2, Some(42)).unwrap();
        let b = generate_maze_with(Generator::RoomGrowth, 2, Some(42)).unwrap();
        assert_ne!(a, b);
        assert!(a.is_spanning_tree());
        assert!(b.is_spanning_tree());
    }

    #[test]
    fn test_unseeded_generation_spans() {
        let graph = generate_maze(6, None).unwrap();
        assert!(graph.is_spanning_tree());
    }

    #[test]
    fn test_generator_from_str() {
        assert_eq!("branch".parse(), Ok(Generator::BranchPoint));
        assert_eq!("room-growth".parse(), Ok(Generator::RoomGrowth));
        assert!("kruskal".parse::<Generator>().is_err());
    }
}
