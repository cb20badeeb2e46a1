//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input error
    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// Solver error
    #[error("Solver error: {0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Some parts did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Puzzle input lookup errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Reading an existing source failed
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No input file for a puzzle
    #[error("no input for {year} day {day:02} under {}", .dir.display())]
    Missing { year: u16, day: u8, dir: PathBuf },
}

/// Why a single part produced no answer
#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),
}
