//! AOC CLI - Command-line interface for running the Advent of Code 2023 solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod logging;
mod output;

// Import the solutions crate to link the solver plugins
use aoc2023_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::{Config, InputSource};
use error::CliError;
use executor::Executor;
use itertools::Itertools;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    logging::init_logger(config.verbosity);

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        if let Some(e) = executor.unmatched_error() {
            return Err(CliError::Solver(e));
        }
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // list missing inputs up front; they still fail below
    if let InputSource::Directory(dir) = &config.source {
        let missing = work_items
            .iter()
            .filter(|w| !dir.contains(w.year, w.day))
            .map(|w| format!("{}/day{:02}", w.year, w.day))
            .collect_vec();
        if !missing.is_empty() {
            eprintln!(
                "Missing {} input file(s) under {}: {}",
                missing.len(),
                dir.root().display(),
                missing.iter().join(", ")
            );
        }
    }

    let formatter = OutputFormatter::new(config.quiet, config.timings);
    let headers = config.source.is_directory();
    let mut current_day = None;
    let mut results = Vec::new();

    executor.execute(&work_items, |work, result| {
        if headers && current_day != Some((work.year, work.day)) {
            current_day = Some((work.year, work.day));
            formatter.print_header(work.year, work.day);
        }
        formatter.print_result(&result);
        results.push(result);
    });
    formatter.print_summary(&results);

    let failed = results.iter().filter(|r| r.answer.is_err()).count();
    if failed > 0 {
        return Err(CliError::Failed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        log::debug!("filtering solvers by tags {}", tags.iter().join(", "));
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
