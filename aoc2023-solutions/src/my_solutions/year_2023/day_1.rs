use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["parsing"])]
pub struct Solver;

type DigitTable = &'static [(&'static str, u32)];

const DIGITS: [(&str, u32); 9] = [
    ("1", 1),
    ("2", 2),
    ("3", 3),
    ("4", 4),
    ("5", 5),
    ("6", 6),
    ("7", 7),
    ("8", 8),
    ("9", 9),
];

const DIGIT_NAMES: [(&str, u32); 9] = [
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
];

impl AocParser for Solver {
    type SharedData = Vec<String>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let lines: Vec<String> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        calibration_sum(shared, &[&DIGITS]).map(|sum| sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        calibration_sum(shared, &[&DIGITS, &DIGIT_NAMES]).map(|sum| sum.to_string())
    }
}

/// Digits found at every offset of `line`; spellings may overlap.
fn digits<'a>(line: &'a str, tables: &'a [DigitTable]) -> impl Iterator<Item = u32> + 'a {
    (0..line.len()).filter_map(move |start| {
        let rest = line.get(start..)?;
        tables
            .iter()
            .flat_map(|table| table.iter())
            .find(|(name, _)| rest.starts_with(name))
            .map(|&(_, value)| value)
    })
}

fn calibration_sum(lines: &[String], tables: &[DigitTable]) -> Result<u32, SolveError> {
    lines.iter().try_fold(0, |sum, line| {
        let mut found = digits(line, tables);
        let first = found
            .next()
            .ok_or_else(|| SolveError::SolveFailed(format!("no digit in {line:?}").into()))?;
        let last = found.last().unwrap_or(first);
        Ok(sum + first * 10 + last)
    })
}
