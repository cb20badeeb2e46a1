use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Point, SparseGrid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["grid"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData = Vec<Point>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let grid = SparseGrid::try_parse(input, '.', '.', |c| (c == '#').then_some(c))
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        Ok(grid.find_all(|_| true))
    }
}

/// Galaxy positions after every empty row and column grows to `factor` copies.
pub fn expand(galaxies: &[Point], factor: i64) -> Vec<Point> {
    // number of empty lines strictly before each coordinate
    let shifts = |coords: Vec<i64>| -> Vec<i64> {
        let max = coords.iter().copied().max().unwrap_or(0);
        let mut occupied = vec![false; max as usize + 1];
        for c in coords {
            occupied[c as usize] = true;
        }
        occupied
            .iter()
            .scan(0, |empty, &used| {
                let before = *empty;
                if !used {
                    *empty += 1;
                }
                Some(before)
            })
            .collect()
    };

    let dx = shifts(galaxies.iter().map(|p| p.x).collect());
    let dy = shifts(galaxies.iter().map(|p| p.y).collect());
    galaxies
        .iter()
        .map(|p| {
            Point::new(
                p.x + dx[p.x as usize] * (factor - 1),
                p.y + dy[p.y as usize] * (factor - 1),
            )
        })
        .collect()
}

pub fn sum_of_distances(galaxies: &[Point]) -> i64 {
    galaxies
        .iter()
        .tuple_combinations()
        .map(|(a, b)| a.manhattan(*b))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(sum_of_distances(&expand(shared, 2)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(sum_of_distances(&expand(shared, 1_000_000)).to_string())
    }
}
