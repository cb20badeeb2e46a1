use std::collections::HashMap;
use std::ops::Range;

use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 19, tags = ["parsing", "ranges"])]
pub struct Solver;

const START: &str = "in";
const RATINGS: Range<u64> = 1..4001;

/// Ratings in `x`, `m`, `a`, `s` order.
pub type Part = [u64; 4];
type PartRanges = [Range<u64>; 4];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Accept,
    Reject,
    Workflow(String),
}

impl Target {
    fn parse(name: &str) -> Target {
        match name {
            "A" => Target::Accept,
            "R" => Target::Reject,
            other => Target::Workflow(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Condition {
    category: usize,
    less_than: bool,
    value: u64,
}

impl Condition {
    fn matches(&self, part: &Part) -> bool {
        let rating = part[self.category];
        if self.less_than {
            rating < self.value
        } else {
            rating > self.value
        }
    }

    /// Split `range` into the (matching, remaining) sub-ranges.
    fn split(&self, range: &Range<u64>) -> (Range<u64>, Range<u64>) {
        if self.less_than {
            (
                range.start..range.end.min(self.value),
                range.start.max(self.value)..range.end,
            )
        } else {
            (
                range.start.max(self.value + 1)..range.end,
                range.start..range.end.min(self.value + 1),
            )
        }
    }
}

#[derive(Debug, Clone)]
struct Rule {
    condition: Option<Condition>,
    target: Target,
}

#[derive(Debug)]
pub struct System {
    workflows: HashMap<String, Vec<Rule>>,
    parts: Vec<Part>,
}

impl System {
    fn workflow(&self, name: &str) -> Result<&[Rule], SolveError> {
        self.workflows
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| SolveError::SolveFailed(format!("unknown workflow {name}").into()))
    }

    fn accepts(&self, part: &Part) -> Result<bool, SolveError> {
        let mut name = START;
        // more hops than workflows means a cycle
        for _ in 0..=self.workflows.len() {
            let rule = self
                .workflow(name)?
                .iter()
                .find(|r| r.condition.is_none_or(|c| c.matches(part)))
                .ok_or_else(|| SolveError::SolveFailed(format!("{name} has no matching rule").into()))?;
            match &rule.target {
                Target::Accept => return Ok(true),
                Target::Reject => return Ok(false),
                Target::Workflow(next) => name = next.as_str(),
            }
        }
        Err(SolveError::SolveFailed("workflows loop forever".into()))
    }

    /// Number of rating combinations within `1..=4000` that are accepted.
    fn accepted_combinations(&self) -> Result<u64, SolveError> {
        let mut total = 0;
        let mut stack: Vec<(&str, PartRanges, usize)> =
            vec![(START, [RATINGS, RATINGS, RATINGS, RATINGS], 0)];

        while let Some((name, mut ranges, depth)) = stack.pop() {
            if depth > self.workflows.len() {
                return Err(SolveError::SolveFailed("workflows loop forever".into()));
            }
            for rule in self.workflow(name)? {
                let matched = match rule.condition {
                    None => std::mem::replace(&mut ranges, [0..0, 0..0, 0..0, 0..0]),
                    Some(c) => {
                        let (hit, rest) = c.split(&ranges[c.category]);
                        let mut matched = ranges.clone();
                        matched[c.category] = hit;
                        ranges[c.category] = rest;
                        matched
                    }
                };
                if matched.iter().any(Range::is_empty) {
                    continue;
                }
                match &rule.target {
                    Target::Accept => {
                        total += matched.iter().map(|r| r.end - r.start).product::<u64>()
                    }
                    Target::Reject => {}
                    Target::Workflow(next) => stack.push((next.as_str(), matched, depth + 1)),
                }
                if ranges.iter().any(Range::is_empty) {
                    break;
                }
            }
        }
        Ok(total)
    }
}

fn parse_system(input: &str) -> anyhow::Result<System> {
    let workflow_re = Regex::new(r"^(\w+)\{([^}]*)\}$")?;
    let rule_re = Regex::new(r"^([xmas])([<>])(\d+):(\w+)$")?;
    let part_re = Regex::new(r"^\{x=(\d+),m=(\d+),a=(\d+),s=(\d+)\}$")?;

    let mut workflows = HashMap::new();
    let mut parts = Vec::new();
    for (idx, line) in input.lines().map(str::trim).enumerate() {
        if line.is_empty() {
            continue;
        }
        if let Some(caps) = part_re.captures(line) {
            let mut part = [0; 4];
            for (i, rating) in part.iter_mut().enumerate() {
                *rating = caps[i + 1].parse().with_context(|| format!("line {}", idx + 1))?;
            }
            parts.push(part);
            continue;
        }
        let caps = workflow_re
            .captures(line)
            .ok_or_else(|| anyhow!("line {}: unrecognised {line:?}", idx + 1))?;
        let rules = caps[2]
            .split(',')
            .map(|rule| -> anyhow::Result<Rule> {
                let Some(r) = rule_re.captures(rule) else {
                    return Ok(Rule {
                        condition: None,
                        target: Target::parse(rule),
                    });
                };
                let category = "xmas"
                    .find(&r[1])
                    .ok_or_else(|| anyhow!("unknown category {:?}", &r[1]))?;
                Ok(Rule {
                    condition: Some(Condition {
                        category,
                        less_than: &r[2] == "<",
                        value: r[3].parse()?,
                    }),
                    target: Target::parse(&r[4]),
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .with_context(|| format!("line {}", idx + 1))?;
        if rules.last().is_none_or(|r| r.condition.is_some()) {
            bail!("line {}: workflow must end with a fallback rule", idx + 1);
        }
        workflows.insert(caps[1].to_string(), rules);
    }

    if !workflows.contains_key(START) {
        bail!("missing workflow {START:?}");
    }
    Ok(System { workflows, parts })
}

impl AocParser for Solver {
    type SharedData = System;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        parse_system(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut sum = 0;
        for part in &shared.parts {
            if shared.accepts(part)? {
                sum += part.iter().sum::<u64>();
            }
        }
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        shared.accepted_combinations().map(|n| n.to_string())
    }
}
