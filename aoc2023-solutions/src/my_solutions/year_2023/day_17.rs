use std::ops::RangeInclusive;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{dijkstra, Direction, Point, SparseGrid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 17, tags = ["grid", "dijkstra"])]
pub struct Solver;

/// Position plus the axis of the last straight run (`true` = horizontal).
type Crucible = (Point, bool);

/// Least heat loss from the top-left to the bottom-right block.
///
/// Each move is a straight run whose length lies in `streak`, followed by a
/// turn onto the other axis.
fn min_heat_loss(grid: &SparseGrid<u64>, streak: RangeInclusive<i64>) -> Option<u64> {
    let goal = Point::new(grid.width() - 1, grid.height() - 1);
    let starts = [(Point::ORIGIN, true), (Point::ORIGIN, false)];

    dijkstra(
        starts,
        |&(pos, horizontal): &Crucible| {
            let mut moves = Vec::new();
            for dir in Direction::ALL.into_iter().filter(|d| d.is_horizontal() != horizontal) {
                let mut cost = 0;
                for run in 1..=*streak.end() {
                    let next = pos + dir.delta() * run;
                    if !grid.in_bounds(next) {
                        break;
                    }
                    cost += *grid.get(next);
                    if run >= *streak.start() {
                        moves.push(((next, dir.is_horizontal()), cost));
                    }
                }
            }
            moves
        },
        |&(pos, _)| pos == goal,
    )
    .map(|(_, cost)| cost)
}

impl AocParser for Solver {
    type SharedData = SparseGrid<u64>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let grid = SparseGrid::try_parse(input, ' ', 0, |c| c.to_digit(10).map(u64::from))
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if grid.is_empty() {
            return Err(ParseError::MissingData("empty map".into()));
        }
        if grid.len() as i64 != grid.width() * grid.height() {
            return Err(ParseError::InvalidFormat("map rows differ in length".into()));
        }
        Ok(grid)
    }
}

fn solve_with(grid: &SparseGrid<u64>, streak: RangeInclusive<i64>) -> Result<String, SolveError> {
    min_heat_loss(grid, streak)
        .map(|cost| cost.to_string())
        .ok_or_else(|| SolveError::SolveFailed("factory unreachable".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        solve_with(shared, 1..=3)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        solve_with(shared, 4..=10)
    }
}
