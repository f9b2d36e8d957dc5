//! Error types for maze generation.
//!
//! Every variant other than [`MazeError::InvalidSize`] means a generator broke one of its own
//! invariants. Those failures are deterministic for a given size and seed, so retrying does
//! not help.

use std::error::Error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The grid size is below 2 or above the supported maximum.
    InvalidSize {
        /// The rejected size.
        size: u32,
    },
    /// Every branch point ran out of candidates while some cells were still unconnected.
    FrontierExhausted {
        /// Cells that never joined the maze.
        remaining: usize,
        /// Text rendering of the partial maze at the moment of failure.
        partial: String,
    },
    /// A candidate draw produced an index past the end of the candidate list.
    CandidateOutOfRange {
        /// The drawn index.
        index: usize,
        /// Number of candidates available.
        len: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { size } => write!(
                f,
                "invalid maze size {size}: must be between {} and {}",
                crate::maze::MIN_SIZE,
                crate::maze::MAX_SIZE
            ),
            Self::FrontierExhausted { remaining, partial } => write!(
                f,
                "frontier exhausted with {remaining} cells still unconnected; partial maze:\n{partial}"
            ),
            Self::CandidateOutOfRange { index, len } => {
                write!(f, "candidate index {index} out of range for {len} candidates")
            }
        }
    }
}

impl Error for MazeError {}
