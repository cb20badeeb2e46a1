use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["math"])]
pub struct Solver;

/// The raw digit groups of the `Time:` and `Distance:` lines.
#[derive(Debug)]
pub struct Races {
    times: Vec<String>,
    records: Vec<String>,
}

impl AocParser for Solver {
    type SharedData = Races;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        parse_races(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_races(input: &str) -> anyhow::Result<Races> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let mut numbers = |prefix: &str| -> anyhow::Result<Vec<String>> {
        let line = lines.next().ok_or_else(|| anyhow!("missing {prefix} line"))?;
        let rest = line
            .trim()
            .strip_prefix(prefix)
            .ok_or_else(|| anyhow!("expected {prefix:?}"))?;
        let groups: Vec<String> = rest.split_whitespace().map(String::from).collect();
        if let Some(bad) = groups.iter().find(|g| !g.bytes().all(|b| b.is_ascii_digit())) {
            return Err(anyhow!("bad number {bad:?}"));
        }
        Ok(groups)
    };

    let times = numbers("Time:")?;
    let records = numbers("Distance:")?;
    if times.len() != records.len() {
        return Err(anyhow!("{} times but {} distances", times.len(), records.len()));
    }
    Ok(Races { times, records })
}

/// Number of hold times `a` in `0..=time` with `a * (time - a) > record`.
///
/// The winners form the open interval between the roots of
/// `a^2 - time*a + record`; the float estimate is corrected with exact
/// integer checks.
pub fn winning_strategies(time: u64, record: u64) -> u64 {
    let wins = |a: u64| a <= time && u128::from(a) * u128::from(time - a) > u128::from(record);

    let t = time as f64;
    let disc = t * t - 4.0 * record as f64;
    if disc < 0.0 {
        return 0;
    }
    let root = disc.sqrt();
    // the product peaks at time / 2
    let peak = if wins(time / 2) {
        time / 2
    } else if wins(time - time / 2) {
        time - time / 2
    } else {
        return 0;
    };

    let mut lo = (((t - root) / 2.0).floor().max(0.0) as u64).min(peak);
    while lo > 0 && wins(lo - 1) {
        lo -= 1;
    }
    while !wins(lo) {
        lo += 1;
    }

    let mut hi = (((t + root) / 2.0).ceil() as u64).clamp(peak, time);
    while hi < time && wins(hi + 1) {
        hi += 1;
    }
    while !wins(hi) {
        hi -= 1;
    }

    hi - lo + 1
}

fn parse_u64(digits: &str) -> Result<u64, SolveError> {
    digits
        .parse()
        .context("race value out of range")
        .map_err(|e| SolveError::SolveFailed(e.into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut product = 1;
        for (time, record) in shared.times.iter().zip(&shared.records) {
            product *= winning_strategies(parse_u64(time)?, parse_u64(record)?);
        }
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let time = parse_u64(&shared.times.concat())?;
        let record = parse_u64(&shared.records.concat())?;
        Ok(winning_strategies(time, record).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use proptest::prelude::*;

    const EXAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200\n";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "288");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "71503");
    }

    #[test]
    fn test_individual_races() {
        assert_eq!(winning_strategies(7, 9), 4);
        assert_eq!(winning_strategies(15, 40), 8);
        assert_eq!(winning_strategies(30, 200), 9);
        assert_eq!(winning_strategies(4, 4), 0);
        assert_eq!(winning_strategies(0, 0), 0);
    }

    #[test]
    fn test_mismatched_lines_rejected() {
        assert!(Solver::parse("Time: 1 2\nDistance: 3").is_err());
    }

    proptest! {
        #[test]
        fn prop_closed_form_matches_brute_force(time in 0u64..400, record in 0u64..50_000) {
            let brute = (0..=time).filter(|a| a * (time - a) > record).count() as u64;
            prop_assert_eq!(winning_strategies(time, record), brute);
        }
    }
}
