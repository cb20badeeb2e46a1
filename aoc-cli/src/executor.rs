//! Sequential executor for running solvers

use crate::config::{Config, InputSource};
use crate::error::RunError;
use aoc_solver::{DynSolver, SolveError, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Result from a single part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    /// Shared when one failure covers several parts
    pub answer: Result<String, Arc<RunError>>,
    /// Set on the first part of a day only
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A registered solver selected to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    registry: SolverRegistry,
    source: InputSource,
    year: u16,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            source: config.source.clone(),
            year: config.year,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Work items in ascending (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| info.year == self.year)
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: filter_parts(self.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Why a `--day` selection produced no work items
    pub fn unmatched_error(&self) -> Option<SolverError> {
        let day = self.day_filter?;
        let registered = self
            .registry
            .storage()
            .iter_info()
            .any(|info| info.year == self.year && info.day == day);
        match self.part_filter {
            Some(part) if registered => Some(SolveError::PartOutOfRange(part).into()),
            _ => Some(SolverError::NotFound(self.year, day)),
        }
    }

    /// Run every work item in order, handing each part's result to `on_result`
    pub fn execute(
        &self,
        work_items: &[WorkItem],
        mut on_result: impl FnMut(&WorkItem, SolverResult),
    ) {
        for work in work_items {
            let mut solver = match self.prepare(work) {
                Ok(solver) => solver,
                Err(e) => {
                    log::warn!("{} day {:02}: {e}", work.year, work.day);
                    // the same failure for every requested part
                    let e = Arc::new(e);
                    for part in work.parts.clone() {
                        on_result(work, failed_result(work, part, Arc::clone(&e)));
                    }
                    continue;
                }
            };

            let mut parse_duration = Some(solver.parse_duration());
            for part in work.parts.clone() {
                let result = solve_part(work, part, &mut *solver, parse_duration.take());
                on_result(work, result);
            }
        }
    }

    fn prepare(&self, work: &WorkItem) -> Result<Box<dyn DynSolver>, RunError> {
        let input = self.source.load(work.year, work.day)?;
        Ok(self.registry.create_solver(work.year, work.day, &input)?)
    }
}

/// Parts to run given the part filter and the solver's part count
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn solve_part(
    work: &WorkItem,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(result) => {
            let duration = result.duration();
            (Ok(result.answer), duration)
        }
        Err(e) => (
            Err(Arc::new(RunError::Solver(SolverError::SolveError(e)))),
            TimeDelta::zero(),
        ),
    };
    log::debug!("{} day {:02} part {part} solved in {solve_duration}", work.year, work.day);
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer,
        parse_duration,
        solve_duration,
    }
}

fn failed_result(work: &WorkItem, part: u8, error: Arc<RunError>) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}
