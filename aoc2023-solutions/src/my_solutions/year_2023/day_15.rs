use anyhow::{bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 15, tags = ["hashing"])]
pub struct Solver;

const BOXES: usize = 256;

/// Holiday ASCII String Helper: `(h + byte) * 17 mod 256` over every byte.
pub fn holiday_hash(s: &str) -> usize {
    s.bytes()
        .fold(0, |h, b| (h + b as usize) * 17 % BOXES)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Insert(u32),
    Remove,
}

#[derive(Debug, Clone)]
pub struct Step {
    raw: String,
    label: String,
    op: Operation,
}

impl Step {
    fn parse(raw: &str) -> anyhow::Result<Step> {
        let (label, op) = if let Some(label) = raw.strip_suffix('-') {
            (label, Operation::Remove)
        } else if let Some((label, focal)) = raw.split_once('=') {
            let focal = focal.parse().with_context(|| format!("focal length {focal:?}"))?;
            (label, Operation::Insert(focal))
        } else {
            bail!("no operation in {raw:?}");
        };
        if label.is_empty() {
            bail!("missing label in {raw:?}");
        }
        Ok(Step {
            raw: raw.to_string(),
            label: label.to_string(),
            op,
        })
    }
}

/// Run the HASHMAP procedure, returning each box's lenses in slot order.
fn arrange(steps: &[Step]) -> Vec<Vec<(&str, u32)>> {
    let mut boxes: Vec<Vec<(&str, u32)>> = vec![Vec::new(); BOXES];
    for step in steps {
        let lenses = &mut boxes[holiday_hash(&step.label)];
        let slot = lenses.iter().position(|(label, _)| *label == step.label);
        match (&step.op, slot) {
            (Operation::Insert(focal), Some(i)) => lenses[i].1 = *focal,
            (Operation::Insert(focal), None) => lenses.push((&step.label, *focal)),
            (Operation::Remove, Some(i)) => {
                lenses.remove(i);
            }
            (Operation::Remove, None) => {}
        }
    }
    boxes
}

fn focusing_power(boxes: &[Vec<(&str, u32)>]) -> usize {
    boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (b + 1) * (slot + 1) * focal as usize)
        })
        .sum()
}

impl AocParser for Solver {
    type SharedData = Vec<Step>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let steps = input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Step::parse)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if steps.is_empty() {
            return Err(ParseError::MissingData("no steps".into()));
        }
        Ok(steps)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|s| holiday_hash(&s.raw))
            .sum::<usize>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(focusing_power(&arrange(shared)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7\n";

    #[test]
    fn test_hash() {
        assert_eq!(holiday_hash("HASH"), 52);
        assert_eq!(holiday_hash("rn"), 0);
        assert_eq!(holiday_hash("qp"), 1);
    }

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1320");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "145");
    }

    #[test]
    fn test_replace_keeps_slot() {
        let steps = Solver::parse("a=1,b=2,a=5").unwrap();
        let boxes = arrange(&steps);
        assert_eq!(boxes[holiday_hash("a")].first(), Some(&("a", 5)));
    }

    #[test]
    fn test_invalid_step() {
        assert!(Solver::parse("rn=1,cm").is_err());
        assert!(Solver::parse("=4").is_err());
    }
}
