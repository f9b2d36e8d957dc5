//! Seed-reproducible perfect maze generation on square grids.
//!
//! A maze is a spanning tree over the rooms of an `n`×`n` grid: every room is reachable from
//! every other by exactly one path. [`generate_maze`] builds one from a size and a seed, and
//! [`walls_of`] turns it into the wall segments a renderer draws.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod rng;

pub use error::MazeError;
pub use generators::{Generator, generate_maze, generate_maze_with};
pub use maze::{ConnectivityGraph, Coordinate, Edge, WallSet, coordinate, edge, walls_of};
