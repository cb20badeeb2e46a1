use anyhow::{anyhow, bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::grid::{lattice_points, Direction, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 18, tags = ["geometry"])]
pub struct Solver;

/// One dig instruction as written, plus the one hidden in its colour code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigStep {
    plain: (Direction, i64),
    decoded: (Direction, i64),
}

fn direction_from_letter(letter: &str) -> anyhow::Result<Direction> {
    Ok(match letter {
        "U" => Direction::North,
        "D" => Direction::South,
        "L" => Direction::West,
        "R" => Direction::East,
        other => bail!("unknown direction {other:?}"),
    })
}

/// `#ddddde`: five hex digits of distance, then the direction `0..=3` = R, D, L, U.
fn decode_colour(hex: &str) -> anyhow::Result<(Direction, i64)> {
    let distance = i64::from_str_radix(&hex[..5], 16)?;
    let direction = match &hex[5..] {
        "0" => Direction::East,
        "1" => Direction::South,
        "2" => Direction::West,
        "3" => Direction::North,
        other => bail!("unknown direction digit {other:?}"),
    };
    Ok((direction, distance))
}

fn parse_step(line_re: &Regex, line: &str) -> anyhow::Result<DigStep> {
    let caps = line_re
        .captures(line)
        .ok_or_else(|| anyhow!("expected `D N (#rrggbb)`, got {line:?}"))?;
    Ok(DigStep {
        plain: (direction_from_letter(&caps[1])?, caps[2].parse()?),
        decoded: decode_colour(&caps[3])?,
    })
}

fn parse_plan(input: &str) -> anyhow::Result<Vec<DigStep>> {
    let line_re = Regex::new(r"^([UDLR]) (\d+) \(#([0-9a-fA-F]{6})\)$")?;
    input
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(idx, line)| {
            parse_step(&line_re, line).with_context(|| format!("line {}", idx + 1))
        })
        .collect()
}

/// Cubic metres held by the trench dug by `moves`, trench included.
fn lagoon_size(moves: impl IntoIterator<Item = (Direction, i64)>) -> Result<i64, SolveError> {
    let mut pos = Point::ORIGIN;
    let mut vertices = Vec::new();
    for (direction, distance) in moves {
        vertices.push(pos);
        pos += direction.delta() * distance;
    }
    if pos != Point::ORIGIN {
        return Err(SolveError::SolveFailed(
            format!("dig plan ends at {pos}, not back at the start").into(),
        ));
    }
    Ok(lattice_points(&vertices))
}

impl AocParser for Solver {
    type SharedData = Vec<DigStep>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let plan = parse_plan(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if plan.is_empty() {
            return Err(ParseError::MissingData("empty dig plan".into()));
        }
        Ok(plan)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        lagoon_size(shared.iter().map(|s| s.plain)).map(|n| n.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        lagoon_size(shared.iter().map(|s| s.decoded)).map(|n| n.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
R 6 (#70c710)
D 5 (#0dc571)
L 2 (#5713f0)
D 2 (#d2c081)
R 2 (#59c680)
D 2 (#411b91)
L 5 (#8ceee2)
U 2 (#caa173)
L 1 (#1b58a2)
U 2 (#caa171)
R 2 (#7807d2)
U 3 (#a77fa3)
L 2 (#015232)
U 2 (#7a21e3)
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "62");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "952408144115");
    }

    #[test]
    fn test_decode_colour() {
        assert_eq!(decode_colour("70c710").unwrap(), (Direction::East, 461937));
        assert_eq!(decode_colour("caa173").unwrap(), (Direction::North, 829975));
        assert_eq!(decode_colour("d2c081").unwrap(), (Direction::South, 863240));
        assert_eq!(decode_colour("8ceee2").unwrap(), (Direction::West, 577262));
        assert!(decode_colour("70c714").is_err());
    }

    #[test]
    fn test_open_plan_fails() {
        let mut shared = Solver::parse("R 2 (#000000)\nD 2 (#000000)").unwrap();
        assert!(Solver::solve_part(&mut shared, 1).is_err());
    }

    #[test]
    fn test_bad_line_reports_number() {
        let err = Solver::parse("R 6 (#70c710)\nX 1 (#000000)").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
