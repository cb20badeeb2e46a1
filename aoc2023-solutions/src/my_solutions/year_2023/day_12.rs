use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 12, tags = ["dp"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpringRow {
    /// `.` operational, `#` damaged, `?` unknown
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl SpringRow {
    fn unfold(&self) -> SpringRow {
        let mut springs = Vec::with_capacity(self.springs.len() * 5 + 4);
        for copy in 0..5 {
            if copy > 0 {
                springs.push(b'?');
            }
            springs.extend_from_slice(&self.springs);
        }
        SpringRow {
            springs,
            groups: self.groups.repeat(5),
        }
    }

    /// Whether damaged group `size` fits at `start` followed by a gap or the end.
    fn fits(&self, start: usize, size: usize) -> bool {
        let end = start + size;
        end <= self.springs.len()
            && !self.springs[start..end].contains(&b'.')
            && self.springs.get(end) != Some(&b'#')
    }

    pub fn arrangements(&self) -> u64 {
        let cache = DpCache::with_problem(HashMapBackend::new(), Arrangements { row: self });
        cache.get(&(0, 0))
    }
}

/// Ways to finish a row from spring `i` with `g` groups already placed.
struct Arrangements<'a> {
    row: &'a SpringRow,
}

impl DpProblem<(usize, usize), u64> for Arrangements<'_> {
    fn deps(&self, &(i, g): &(usize, usize)) -> Vec<(usize, usize)> {
        let springs = &self.row.springs;
        let Some(&spring) = springs.get(i) else {
            return vec![];
        };

        let mut deps = Vec::with_capacity(2);
        if spring != b'#' {
            deps.push((i + 1, g));
        }
        if spring != b'.' {
            if let Some(&size) = self.row.groups.get(g) {
                if self.row.fits(i, size) {
                    // skip the group and the operational spring after it
                    deps.push(((i + size + 1).min(springs.len()), g + 1));
                }
            }
        }
        deps
    }

    fn compute(&self, &(i, g): &(usize, usize), deps: Vec<u64>) -> u64 {
        if i >= self.row.springs.len() {
            u64::from(g == self.row.groups.len())
        } else {
            deps.iter().sum()
        }
    }
}

impl AocParser for Solver {
    type SharedData = Vec<SpringRow>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(idx, line)| parse_row(line.trim()).with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_row(line: &str) -> anyhow::Result<SpringRow> {
    let (springs, groups) = line
        .split_once(' ')
        .ok_or_else(|| anyhow!("expected '<springs> <groups>'"))?;
    if let Some(bad) = springs.chars().find(|c| !matches!(c, '.' | '#' | '?')) {
        bail!("unknown spring {bad:?}");
    }
    let groups = groups
        .split(',')
        .map(|g| g.trim().parse::<usize>())
        .collect::<Result<Vec<_>, _>>()?;
    if groups.contains(&0) {
        bail!("damaged groups must be non-empty");
    }
    Ok(SpringRow {
        springs: springs.as_bytes().to_vec(),
        groups,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.iter().map(SpringRow::arrangements).sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|row| row.unfold().arrangements())
            .sum::<u64>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const ROWS: [(&str, u64, u64); 6] = [
        ("???.### 1,1,3", 1, 1),
        (".??..??...?##. 1,1,3", 4, 16384),
        ("?#?#?#?#?#?#?#? 1,3,1,6", 1, 1),
        ("????.#...#... 4,1,1", 1, 16),
        ("????.######..#####. 1,6,5", 4, 2500),
        ("?###???????? 3,2,1", 10, 506250),
    ];

    #[test]
    fn test_rows() {
        for (line, folded, unfolded) in ROWS {
            let row = parse_row(line).unwrap();
            assert_eq!(row.arrangements(), folded, "{line}");
            assert_eq!(row.unfold().arrangements(), unfolded, "{line}");
        }
    }

    #[test]
    fn test_example_totals() {
        let input = ROWS.map(|(line, _, _)| line).join("\n");
        let mut shared = Solver::parse(&input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "21");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "525152");
    }
}
