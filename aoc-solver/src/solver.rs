//! Parsing and per-part solving traits
//!
//! A day is a unit struct: [`AocParser`] turns the puzzle text into
//! `SharedData` once, and each part mutates or reads that value through
//! [`PartSolver<N>`]. [`Solver`] ties the parts together behind a runtime part
//! number and is normally derived.

use crate::error::{ParseError, SolveError};

/// Turns puzzle text into the value every part works on.
///
/// Report malformed text as [`ParseError::InvalidFormat`] with enough context
/// (line number, offending token) to find the problem in the input file.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// // 2023 day 9: one history of readings per line
/// struct Mirage;
///
/// impl AocParser for Mirage {
///     type SharedData = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
///         input
///             .lines()
///             .enumerate()
///             .map(|(idx, line)| {
///                 line.split_whitespace()
///                     .map(|v| v.parse::<i64>())
///                     .collect::<Result<Vec<_>, _>>()
///                     .map_err(|e| ParseError::InvalidFormat(format!("line {}: {e}", idx + 1)))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Mirage::parse("0 3 6\n1 3").unwrap(), vec![vec![0, 3, 6], vec![1, 3]]);
/// assert!(Mirage::parse("0 x").is_err());
/// ```
pub trait AocParser {
    /// Parsed input, plus anything one part computes for a later one.
    type SharedData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError>;
}

/// Part `N` of a day.
///
/// Parts are const-generic so the derived dispatch refers to each impl
/// statically; a missing `PartSolver<2>` on a two-part day does not compile.
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Mirage;
///
/// impl AocParser for Mirage {
///     type SharedData = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
///         Ok(input
///             .lines()
///             .map(|l| l.split_whitespace().filter_map(|v| v.parse().ok()).collect())
///             .collect())
///     }
/// }
///
/// fn next_value(history: &[i64]) -> i64 {
///     if history.iter().all(|&v| v == 0) {
///         return 0;
///     }
///     let deltas: Vec<i64> = history.windows(2).map(|w| w[1] - w[0]).collect();
///     history[history.len() - 1] + next_value(&deltas)
/// }
///
/// impl PartSolver<1> for Mirage {
///     fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
///         Ok(shared.iter().map(|h| next_value(h)).sum::<i64>().to_string())
///     }
/// }
///
/// let mut shared = Mirage::parse("0 3 6 9 12 15\n1 3 6 10 15 21").unwrap();
/// assert_eq!(<Mirage as PartSolver<1>>::solve(&mut shared).unwrap(), "46");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// The answer rendered for display, or [`SolveError::SolveFailed`] when the
    /// input parses but admits no answer.
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError>;
}

/// A whole day, solvable by runtime part number.
///
/// `#[derive(AocSolver)]` with `#[aoc_solver(max_parts = N)]` writes this impl,
/// forwarding part `p` to `PartSolver<p>`. A hand-written impl answers unknown
/// parts with [`SolveError::PartNotImplemented`]:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// // 2023 day 9, both directions
/// struct Mirage;
///
/// impl AocParser for Mirage {
///     type SharedData = Vec<Vec<i64>>;
///
///     fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
///         Ok(input
///             .lines()
///             .map(|l| l.split_whitespace().filter_map(|v| v.parse().ok()).collect())
///             .collect())
///     }
/// }
///
/// fn next_value(history: &[i64]) -> i64 {
///     if history.iter().all(|&v| v == 0) {
///         return 0;
///     }
///     let deltas: Vec<i64> = history.windows(2).map(|w| w[1] - w[0]).collect();
///     history[history.len() - 1] + next_value(&deltas)
/// }
///
/// impl Solver for Mirage {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.iter().map(|h| next_value(h)).sum::<i64>().to_string()),
///             2 => {
///                 // extrapolating backwards is extrapolating the reversed history
///                 shared.iter_mut().for_each(|h| h.reverse());
///                 Ok(shared.iter().map(|h| next_value(h)).sum::<i64>().to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Mirage::parse("10 13 16 21 30 45").unwrap();
/// assert_eq!(Mirage::solve_part(&mut shared, 1).unwrap(), "68");
/// assert_eq!(Mirage::solve_part(&mut shared, 2).unwrap(), "5");
/// assert!(Mirage::solve_part(&mut shared, 3).is_err());
/// ```
pub trait Solver: AocParser {
    const PARTS: u8;

    /// Forward to the implementation of `part`. Callers holding input from
    /// outside should prefer [`SolverExt::solve_part_checked_range`].
    fn solve_part(shared: &mut Self::SharedData, part: u8) -> Result<String, SolveError>;
}

/// Range-checked part dispatch, implemented for every [`Solver`].
pub trait SolverExt: Solver {
    /// [`SolveError::PartOutOfRange`] for part 0 and parts past `PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData,
        part: u8,
    ) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
