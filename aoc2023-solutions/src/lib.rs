//! Advent of Code 2023 puzzle solutions with automatic registration
//!
//! The [`utils`] module holds the reusable pieces: a sparse 2D grid toolkit
//! with search primitives and lattice geometry, and a memoising DP cache.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the solver framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
