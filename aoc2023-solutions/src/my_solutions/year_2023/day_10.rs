use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{interior_points, shoelace_doubled, Direction, Point, SparseGrid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["grid", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    grid: SparseGrid<char>,
    start: Point,
    main_loop: Option<Vec<Point>>,
}

/// The two openings of a pipe tile.
fn connections(tile: char) -> Option<[Direction; 2]> {
    use Direction::*;
    match tile {
        '|' => Some([North, South]),
        '-' => Some([West, East]),
        'L' => Some([North, East]),
        'J' => Some([North, West]),
        '7' => Some([South, West]),
        'F' => Some([South, East]),
        _ => None,
    }
}

impl AocParser for Solver {
    type SharedData = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let grid = SparseGrid::try_parse(input, '.', '.', |c| {
            matches!(c, '|' | '-' | 'L' | 'J' | '7' | 'F' | 'S').then_some(c)
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        let start = grid
            .find(|&c| c == 'S')
            .ok_or_else(|| ParseError::MissingData("no 'S' tile".into()))?;

        Ok(SharedData {
            grid,
            start,
            main_loop: None,
        })
    }
}

/// Follow the pipe leaving `start` towards `heading` until it returns to `start`.
///
/// Returns `None` if the pipe breaks off first.
fn walk(grid: &SparseGrid<char>, start: Point, mut heading: Direction) -> Option<Vec<Point>> {
    let mut path = vec![start];
    let mut pos = start + heading;
    // a loop cannot be longer than the number of pipe tiles
    for _ in 0..=grid.len() {
        if pos == start {
            return Some(path);
        }
        let [a, b] = connections(*grid.get(pos))?;
        let entered_from = heading.reverse();
        heading = if a == entered_from {
            b
        } else if b == entered_from {
            a
        } else {
            return None;
        };
        path.push(pos);
        pos += heading;
    }
    None
}

/// The loop through the start tile, in walking order, starting at `S`.
fn main_loop(shared: &mut SharedData) -> Result<&[Point], SolveError> {
    if shared.main_loop.is_none() {
        let found = Direction::ALL
            .into_iter()
            .find_map(|heading| walk(&shared.grid, shared.start, heading))
            .ok_or_else(|| SolveError::SolveFailed("no loop through the start tile".into()))?;
        log::debug!("main loop has {} tiles", found.len());
        shared.main_loop = Some(found);
    }
    shared
        .main_loop
        .as_deref()
        .ok_or_else(|| SolveError::SolveFailed("loop not computed".into()))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok((main_loop(shared)?.len() / 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let tiles = main_loop(shared)?;
        let enclosed = interior_points(shoelace_doubled(tiles), tiles.len() as i64);
        Ok(enclosed.to_string())
    }
}
