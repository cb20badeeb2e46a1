//! Advent of Code Solver Library
//!
//! A small, type-safe framework for the daily puzzle solvers. Each puzzle
//! is a solver type with its own input parsing and one implementation per part.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`]: parse the puzzle text once into shared data
//! - [`PartSolver<N>`]: solve part `N` from the shared data
//! - [`Solver`]: part dispatch, usually derived with `#[derive(AocSolver)]`
//! - [`DynSolver`]: type-erased, timed solver instances
//! - [`SolverRegistry`]: lookup by year/day, filled from plugins
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, RegisterableSolver, SolveError, SolverRegistryBuilder};
//!
//! // 2023 day 1: calibration values from the first and last digit of each line
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Trebuchet;
//!
//! const NAMES: [&str; 9] = ["one", "two", "three", "four", "five", "six", "seven", "eight", "nine"];
//!
//! fn calibration(lines: &[String], spelled: bool) -> u32 {
//!     let digit_at = |line: &str, i: usize| {
//!         let rest = &line[i..];
//!         rest.chars().next().and_then(|c| c.to_digit(10)).or_else(|| {
//!             spelled
//!                 .then(|| NAMES.iter().position(|n| rest.starts_with(n)))
//!                 .flatten()
//!                 .map(|p| p as u32 + 1)
//!         })
//!     };
//!     lines
//!         .iter()
//!         .map(|line| {
//!             let digits: Vec<u32> = (0..line.len()).filter_map(|i| digit_at(line, i)).collect();
//!             digits.first().zip(digits.last()).map_or(0, |(a, b)| a * 10 + b)
//!         })
//!         .sum()
//! }
//!
//! impl AocParser for Trebuchet {
//!     type SharedData = Vec<String>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
//!         if !input.is_ascii() {
//!             return Err(ParseError::InvalidFormat("expected ASCII".into()));
//!         }
//!         Ok(input.lines().map(str::to_string).collect())
//!     }
//! }
//!
//! impl PartSolver<1> for Trebuchet {
//!     fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
//!         Ok(calibration(shared, false).to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Trebuchet {
//!     fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
//!         Ok(calibration(shared, true).to_string())
//!     }
//! }
//!
//! let registry = Trebuchet
//!     .register_with(SolverRegistryBuilder::new(), 2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "a1b2c\n7pqr2eighthree").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "84");
//! assert_eq!(solver.solve(2).unwrap().answer, "85");
//! ```
//!
//! # Plugin System
//!
//! Use `#[derive(AutoRegisterSolver)]` to submit a solver to the registry at
//! link time:
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2023, day = 1, tags = ["parsing"])]
//! pub struct Solver;
//! ```
//! and collect them with [`SolverRegistryBuilder::register_all_plugins`].

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
