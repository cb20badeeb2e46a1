use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Point, SparseGrid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid"])]
pub struct Solver;

/// A symbol and the part numbers touching it.
#[derive(Debug)]
pub struct Part {
    symbol: char,
    numbers: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData = Vec<Part>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let grid = SparseGrid::parse(input, '.');
        if grid.is_empty() {
            return Err(ParseError::MissingData("empty schematic".into()));
        }

        let symbols = grid.find_all(|c| !c.is_ascii_digit());
        Ok(symbols
            .into_iter()
            .map(|p| Part {
                symbol: *grid.get(p),
                numbers: nearby_numbers(&grid, p),
            })
            .collect())
    }
}

/// Numbers in the 8-neighbourhood of `p`, each counted once.
fn nearby_numbers(grid: &SparseGrid<char>, p: Point) -> Vec<u64> {
    let is_digit = |q: Point| grid.get(q).is_ascii_digit();
    let mut used = HashSet::new();
    let mut numbers = Vec::new();

    for q in p.neighbours() {
        if used.contains(&q) || !is_digit(q) {
            continue;
        }

        let mut start = q;
        while is_digit(start + Point::WEST) {
            start += Point::WEST;
        }

        let mut value = 0;
        let mut cursor = start;
        while let Some(digit) = grid.get(cursor).to_digit(10) {
            value = value * 10 + u64::from(digit);
            used.insert(cursor);
            cursor += Point::EAST;
        }
        numbers.push(value);
    }
    numbers
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .flat_map(|part| part.numbers.iter())
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|part| part.symbol == '*' && part.numbers.len() == 2)
            .map(|part| part.numbers.iter().product::<u64>())
            .sum::<u64>()
            .to_string())
    }
}
