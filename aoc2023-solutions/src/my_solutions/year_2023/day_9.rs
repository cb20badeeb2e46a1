use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["math"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i64>, _>>()
                    .with_context(|| format!("line {}", idx + 1))
            })
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

/// Next value of the sequence by repeated differencing.
fn extrapolate(history: &[i64]) -> i64 {
    let mut next = 0;
    let mut row = history.to_vec();
    while row.iter().any(|&n| n != 0) {
        next += row.last().copied().unwrap_or(0);
        row = row.windows(2).map(|w| w[1] - w[0]).collect();
    }
    next
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.iter().map(|h| extrapolate(h)).sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|h| {
                let reversed: Vec<i64> = h.iter().rev().copied().collect();
                extrapolate(&reversed)
            })
            .sum::<i64>()
            .to_string())
    }
}
