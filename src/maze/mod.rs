pub mod graph;
pub mod grid;
pub mod registry;
pub mod walls;

pub use graph::ConnectivityGraph;
pub use grid::{Coordinate, Direction, Edge, coordinate, edge};
pub use registry::{CoordId, EdgeId, Registry};
pub use walls::{WallSet, walls_of};

use crate::error::MazeError;

/// Smallest grid that can hold a maze.
pub const MIN_SIZE: u32 = 2;
/// Largest grid accepted by the generators.
pub const MAX_SIZE: u32 = 4096;

/// Rejects sizes outside `MIN_SIZE..=MAX_SIZE` before any generation work starts.
pub fn validate_size(size: u32) -> Result<u32, MazeError> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(MazeError::InvalidSize { size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_bounds() {
        assert_eq!(validate_size(2), Ok(2));
        assert_eq!(validate_size(MAX_SIZE), Ok(MAX_SIZE));
        assert_eq!(validate_size(1), Err(MazeError::InvalidSize { size: 1 }));
        assert_eq!(validate_size(0), Err(MazeError::InvalidSize { size: 0 }));
        assert!(validate_size(MAX_SIZE + 1).is_err());
    }
}
