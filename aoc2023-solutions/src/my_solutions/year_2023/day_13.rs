use anyhow::bail;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 13, tags = ["grid", "bits"])]
pub struct Solver;

/// A mirror pattern as bitmasks, one per row and one per column.
#[derive(Debug)]
pub struct Pattern {
    rows: Vec<u64>,
    columns: Vec<u64>,
}

impl Pattern {
    fn from_lines(lines: &[&str]) -> anyhow::Result<Pattern> {
        let width = lines.first().map_or(0, |l| l.len());
        if width == 0 || width > 64 || lines.len() > 64 {
            bail!("pattern must be 1-64 cells wide and tall");
        }
        let mut rows = vec![0u64; lines.len()];
        let mut columns = vec![0u64; width];
        for (y, line) in lines.iter().enumerate() {
            if line.len() != width {
                bail!("ragged pattern row {}", y + 1);
            }
            for (x, ch) in line.bytes().enumerate() {
                match ch {
                    b'#' => {
                        rows[y] |= 1 << x;
                        columns[x] |= 1 << y;
                    }
                    b'.' => {}
                    other => bail!("unexpected {:?}", other as char),
                }
            }
        }
        Ok(Pattern { rows, columns })
    }

    /// Reflection summary value with exactly `smudges` differing cells.
    fn summary(&self, smudges: u32) -> Option<usize> {
        mirror_after(&self.rows, smudges)
            .map(|n| 100 * n)
            .or_else(|| mirror_after(&self.columns, smudges))
    }
}

/// Lines before the first mirror line whose reflection differs in `smudges` bits.
fn mirror_after(lines: &[u64], smudges: u32) -> Option<usize> {
    (1..lines.len()).find(|&split| {
        let (before, after) = lines.split_at(split);
        before
            .iter()
            .rev()
            .zip(after)
            .map(|(a, b)| (a ^ b).count_ones())
            .sum::<u32>()
            == smudges
    })
}

impl AocParser for Solver {
    type SharedData = Vec<Pattern>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let lines: Vec<&str> = input.lines().map(str::trim).collect();
        let patterns = lines
            .split(|l| l.is_empty())
            .filter(|block| !block.is_empty())
            .enumerate()
            .map(|(idx, block)| {
                Pattern::from_lines(block)
                    .map_err(|e| ParseError::InvalidFormat(format!("pattern {}: {e}", idx + 1)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if patterns.is_empty() {
            return Err(ParseError::MissingData("no patterns".into()));
        }
        Ok(patterns)
    }
}

fn total(patterns: &[Pattern], smudges: u32) -> Result<String, SolveError> {
    let mut sum = 0;
    for (idx, pattern) in patterns.iter().enumerate() {
        sum += pattern.summary(smudges).ok_or_else(|| {
            SolveError::SolveFailed(format!("pattern {} has no reflection", idx + 1).into())
        })?;
    }
    Ok(sum.to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        total(shared, 0)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        total(shared, 1)
    }
}
