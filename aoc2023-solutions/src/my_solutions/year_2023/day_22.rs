use std::collections::{HashMap, HashSet};

use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 22, tags = ["simulation", "graph"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brick {
    low: [i64; 3],
    high: [i64; 3],
}

impl Brick {
    fn footprint(&self) -> impl Iterator<Item = (i64, i64)> {
        (self.low[0]..=self.high[0]).cartesian_product(self.low[1]..=self.high[1])
    }
}

/// Bricks at rest, in settling order, with who rests on whom.
#[derive(Debug)]
pub struct Stack {
    /// `supporters[i]`: bricks directly below brick `i`.
    supporters: Vec<HashSet<usize>>,
    /// `supporting[i]`: bricks resting directly on brick `i`.
    supporting: Vec<Vec<usize>>,
}

impl Stack {
    /// Drop every brick until it lands on the ground or another brick.
    fn settle(mut bricks: Vec<Brick>) -> Stack {
        bricks.sort_by_key(|b| b.low[2]);
        // top height and owner per column
        let mut heights: HashMap<(i64, i64), (i64, usize)> = HashMap::new();
        let mut supporters = vec![HashSet::new(); bricks.len()];
        let mut supporting = vec![Vec::new(); bricks.len()];

        for (id, brick) in bricks.iter().enumerate() {
            let rest = brick
                .footprint()
                .filter_map(|cell| heights.get(&cell).map(|&(z, _)| z))
                .max()
                .unwrap_or(0);
            for cell in brick.footprint() {
                if let Some(&(z, below)) = heights.get(&cell)
                    && z == rest
                    && supporters[id].insert(below)
                {
                    supporting[below].push(id);
                }
            }
            let top = rest + 1 + brick.high[2] - brick.low[2];
            for cell in brick.footprint() {
                heights.insert(cell, (top, id));
            }
        }
        Stack {
            supporters,
            supporting,
        }
    }

    fn safe_to_disintegrate(&self) -> usize {
        self.supporting
            .iter()
            .filter(|above| above.iter().all(|&b| self.supporters[b].len() > 1))
            .count()
    }

    /// Other bricks that fall when brick `removed` disappears.
    fn chain_reaction(&self, removed: usize) -> usize {
        let mut fallen = HashSet::from([removed]);
        // settling order puts every brick after all of its supporters
        for id in removed + 1..self.supporters.len() {
            let below = &self.supporters[id];
            if !below.is_empty() && below.is_subset(&fallen) {
                fallen.insert(id);
            }
        }
        fallen.len() - 1
    }
}

fn parse_bricks(input: &str) -> anyhow::Result<Vec<Brick>> {
    let brick_re = Regex::new(r"^(\d+),(\d+),(\d+)~(\d+),(\d+),(\d+)$")?;
    input
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(idx, line)| -> anyhow::Result<Brick> {
            let caps = brick_re
                .captures(line)
                .ok_or_else(|| anyhow!("line {}: expected `x,y,z~x,y,z`, got {line:?}", idx + 1))?;
            let mut ends = [0i64; 6];
            for (i, end) in ends.iter_mut().enumerate() {
                *end = caps[i + 1].parse().with_context(|| format!("line {}", idx + 1))?;
            }
            let [x1, y1, z1, x2, y2, z2] = ends;
            Ok(Brick {
                low: [x1.min(x2), y1.min(y2), z1.min(z2)],
                high: [x1.max(x2), y1.max(y2), z1.max(z2)],
            })
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData = Stack;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let bricks =
            parse_bricks(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if bricks.is_empty() {
            return Err(ParseError::MissingData("no bricks".into()));
        }
        Ok(Stack::settle(bricks))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.safe_to_disintegrate().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let total: usize = (0..shared.supporters.len())
            .map(|id| shared.chain_reaction(id))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "7");
    }

    #[test]
    fn test_example_supports() {
        let stack = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(stack.supporting[0], vec![1, 2]);
        assert_eq!(stack.supporters[3], HashSet::from([1, 2]));
        assert_eq!(stack.chain_reaction(0), 6);
        assert_eq!(stack.chain_reaction(5), 1);
    }

    #[test]
    fn test_vertical_tower_falls_entirely() {
        let mut shared = Solver::parse("0,0,1~0,0,1\n0,0,5~0,0,7\n0,0,9~0,0,9").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "3");
    }
}
