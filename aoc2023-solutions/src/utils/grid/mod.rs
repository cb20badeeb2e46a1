//! 2D grid toolkit
//!
//! - [`Point`] and [`Direction`]: integer coordinates, unit vectors and
//!   4/8-neighbourhoods. `y` grows downward.
//! - [`SparseGrid`]: text parsed into a `Point -> value` map with an implicit
//!   background value.
//! - [`reachable`], [`bfs_distances`], [`dijkstra`]: searches over any
//!   hashable state, so puzzles can fold heading or streak into the key.
//! - [`shoelace_doubled`], [`boundary_length`], [`interior_points`],
//!   [`lattice_points`]: polygon area and Pick's theorem.
//!
//! # Example
//!
//! ```rust
//! use aoc2023_solutions::utils::grid::{bfs_distances, Point, SparseGrid};
//!
//! let grid = SparseGrid::parse("S.#\n..#\n...", '.');
//! let start = grid.find(|&c| c == 'S').unwrap();
//!
//! let distances = bfs_distances(start, None, |&p: &Point| {
//!     p.orthogonal_neighbours()
//!         .filter(|&n| grid.in_bounds(n) && *grid.get(n) != '#')
//!         .collect::<Vec<_>>()
//! });
//! assert_eq!(distances[&Point::new(2, 2)], 4);
//! ```

mod geometry;
mod point;
mod search;
mod sparse;

pub use geometry::{boundary_length, interior_points, lattice_points, shoelace_doubled};
pub use point::{Direction, Point};
pub use search::{bfs_distances, dijkstra, reachable};
pub use sparse::SparseGrid;

#[cfg(test)]
mod tests;
