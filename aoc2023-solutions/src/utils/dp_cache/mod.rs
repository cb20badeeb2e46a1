//! Dynamic Programming Cache with Lazy Evaluation
//!
//! Memoisation for problems whose values depend on other values in a
//! directed acyclic graph. A [`DpProblem`] names the dependencies of an index
//! and combines their values; [`DpCache`] resolves them recursively and
//! computes each index exactly once.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices starting from 0 (auto-growing)
//! - [`HashMapBackend`]: any `Hash + Eq` index, for sparse or tuple keys
//!
//! # Warning: Cycle Behavior
//!
//! **There is no cycle detection.** A cyclic dependency graph recurses until
//! the stack overflows, so dependencies MUST form a DAG.
//!
//! # Example
//!
//! ```rust
//! use aoc2023_solutions::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] }
//!         else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 }
//!         else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&10), 55);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;
