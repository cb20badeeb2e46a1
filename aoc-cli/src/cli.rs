//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code 2023 solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code 2023 solvers", version)]
pub struct Args {
    /// Puzzle year
    #[arg(short, long, default_value_t = 2023)]
    pub year: u16,

    /// Day to run (runs every registered day if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub part: Option<u8>,

    /// Only run solvers carrying all of these tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Read the puzzle input from this file instead of stdin
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding `<year>/dayNN.txt` or `dayNN.txt` inputs
    #[arg(long, env = "AOC_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Show parse and solve durations, then a summary
    #[arg(long)]
    pub timings: bool,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
