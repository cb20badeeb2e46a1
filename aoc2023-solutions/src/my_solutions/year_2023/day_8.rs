use std::collections::HashMap;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 8, tags = ["graph", "math"])]
pub struct Solver;

#[derive(Debug)]
pub struct Network {
    /// `0` = left, `1` = right
    instructions: Vec<usize>,
    nodes: HashMap<String, [String; 2]>,
}

impl Network {
    /// Steps from `start` until `is_end` holds.
    fn steps(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        // past this many steps the walk is cycling without an end node
        let limit = self.instructions.len() * (self.nodes.len() + 1);
        let mut node = start;
        for (count, &turn) in self.instructions.iter().cycle().take(limit).enumerate() {
            let edges = self
                .nodes
                .get(node)
                .ok_or_else(|| SolveError::SolveFailed(format!("unknown node {node}").into()))?;
            node = &edges[turn];
            if is_end(node) {
                return Ok(count as u64 + 1);
            }
        }
        Err(SolveError::SolveFailed(format!("no end reachable from {start}").into()))
    }
}

impl AocParser for Solver {
    type SharedData = Network;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network> {
    let edge_re = Regex::new(r"^(\w+) = \((\w+), (\w+)\)$")?;
    let mut lines = input.lines().map(str::trim).filter(|l| !l.is_empty());

    let instructions = lines
        .next()
        .ok_or_else(|| anyhow!("missing instructions"))?
        .chars()
        .map(|c| match c {
            'L' => Ok(0),
            'R' => Ok(1),
            other => Err(anyhow!("bad instruction {other:?}")),
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let nodes = lines
        .map(|line| -> anyhow::Result<(String, [String; 2])> {
            let caps = edge_re
                .captures(line)
                .with_context(|| format!("bad node line {line:?}"))?;
            Ok((caps[1].to_string(), [caps[2].to_string(), caps[3].to_string()]))
        })
        .collect::<anyhow::Result<HashMap<_, _>>>()?;

    if nodes.is_empty() {
        bail!("no nodes");
    }
    Ok(Network {
        instructions,
        nodes,
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        shared.steps("AAA", |n| n == "ZZZ").map(|s| s.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut starts: Vec<&String> = shared.nodes.keys().filter(|n| n.ends_with('A')).collect();
        starts.sort();
        if starts.is_empty() {
            return Err(SolveError::SolveFailed("no ghost start nodes".into()));
        }

        // each ghost reaches its end node on a fixed cycle
        let mut total = 1u64;
        for start in starts {
            let cycle = shared.steps(start, |n| n.ends_with('Z'))?;
            log::debug!("ghost {start} cycles every {cycle} steps");
            total = num::integer::lcm(total, cycle);
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    #[test]
    fn test_part1_examples() {
        let mut shared =
            Solver::parse("LLR\n\nAAA = (BBB, BBB)\nBBB = (AAA, ZZZ)\nZZZ = (ZZZ, ZZZ)\n").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "6");

        let input = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }

    #[test]
    fn test_part2_example() {
        let input = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "6");
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_unreachable_end_fails() {
        let mut shared = Solver::parse("L\n\nAAA = (BBB, BBB)\nBBB = (AAA, AAA)\nZZZ = (ZZZ, ZZZ)").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }
}
