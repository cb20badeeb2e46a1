//! Solver instance implementation

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle for a specific year and day
///
/// Holds the shared data produced by [`AocParser::parse`](crate::AocParser::parse)
/// together with the parse timestamps.
pub struct SolverInstance<S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<S: Solver> SolverInstance<S> {
    /// Create a new solver instance by parsing input
    ///
    /// # Returns
    /// * `Ok(SolverInstance)` - Parsed instance with timing
    /// * `Err(ParseError)` - Parsing failed
    pub fn new(year: u16, day: u8, input: &str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();
        log::debug!(
            "parsed {}/{:02} in {}µs",
            year,
            day,
            (parse_end - parse_start).num_microseconds().unwrap_or(0)
        );

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    /// Borrow the parsed data
    pub fn shared(&self) -> &S::SharedData {
        &self.shared
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn example(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} (took {:?})", part, result.answer, result.duration());
///     }
///     println!("Parse took {:?}", solver.parse_duration());
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part with timing
    ///
    /// # Returns
    /// * `Ok(SolveResult)` - The part was solved successfully with timing info
    /// * `Err(SolveError)` - The part is out of range or solving failed
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    /// Get the year for this solver
    fn year(&self) -> u16;

    /// Get the day for this solver
    fn day(&self) -> u8;

    /// Get the number of parts this solver supports
    fn parts(&self) -> u8;

    /// Convenience: get parse duration as TimeDelta
    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<S: SolverExt> DynSolver for SolverInstance<S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AocParser;

    struct Doubler;

    impl AocParser for Doubler {
        type SharedData = Vec<u32>;

        fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
            input
                .split_whitespace()
                .map(|w| {
                    w.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("not a number: {w}")))
                })
                .collect()
        }
    }

    impl Solver for Doubler {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<String, SolveError> {
            // part 2 sees part 1's mutation
            shared.iter_mut().for_each(|v| *v *= 2);
            Ok(format!("{}:{}", part, shared.iter().sum::<u32>()))
        }
    }

    #[test]
    fn test_instance_keeps_shared_state_between_parts() {
        let mut instance = SolverInstance::<Doubler>::new(2023, 1, "1 2 3").unwrap();
        assert_eq!(instance.solve(1).unwrap().answer, "1:12");
        assert_eq!(instance.solve(2).unwrap().answer, "2:24");
        assert_eq!(instance.shared(), &vec![4, 8, 12]);
    }

    #[test]
    fn test_instance_reports_metadata_and_timing() {
        let instance = SolverInstance::<Doubler>::new(2023, 7, "5").unwrap();
        assert_eq!(instance.year(), 2023);
        assert_eq!(instance.day(), 7);
        assert_eq!(instance.parts(), 2);
        assert!(instance.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_instance_rejects_out_of_range_part() {
        let mut instance = SolverInstance::<Doubler>::new(2023, 1, "1").unwrap();
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_instance_propagates_parse_error() {
        let result = SolverInstance::<Doubler>::new(2023, 1, "1 x");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
