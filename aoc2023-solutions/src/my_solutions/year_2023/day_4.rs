use std::collections::HashSet;

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["parsing"])]
pub struct Solver;

/// Number of winning numbers matched by each card, in card order.
pub type SharedData = Vec<usize>;

impl AocParser for Solver {
    type SharedData = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_card(line).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_card(line: &str) -> anyhow::Result<usize> {
    let (_, numbers) = line.split_once(':').ok_or_else(|| anyhow!("missing ':'"))?;
    let (winning, got) = numbers.split_once('|').ok_or_else(|| anyhow!("missing '|'"))?;
    let parse_set = |s: &str| -> anyhow::Result<HashSet<u32>> {
        s.split_whitespace()
            .map(|n| n.parse().with_context(|| format!("bad number {n:?}")))
            .collect()
    };
    let winning = parse_set(winning)?;
    let got = parse_set(got)?;
    Ok(winning.intersection(&got).count())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|&&matches| matches > 0)
            .map(|&matches| 1u64 << (matches - 1))
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.len()];
        for (card, &matches) in shared.iter().enumerate() {
            let won = copies[card];
            let end = (card + 1 + matches).min(copies.len());
            for count in &mut copies[card + 1..end] {
                *count += won;
            }
        }
        Ok(copies.iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(shared, vec![4, 2, 2, 1, 0, 0]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "30");
    }
}
