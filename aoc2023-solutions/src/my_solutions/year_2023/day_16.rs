use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{reachable, Direction, Point, SparseGrid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 16, tags = ["grid", "search"])]
pub struct Solver;

/// A beam entering a tile while travelling in a direction.
type Beam = (Point, Direction);

/// Directions a beam leaves `tile` in after arriving with `heading`.
fn deflect(tile: char, heading: Direction) -> Vec<Direction> {
    use Direction::*;
    match (tile, heading) {
        ('/', North) => vec![East],
        ('/', East) => vec![North],
        ('/', South) => vec![West],
        ('/', West) => vec![South],
        ('\\', North) => vec![West],
        ('\\', West) => vec![North],
        ('\\', South) => vec![East],
        ('\\', East) => vec![South],
        ('|', d) if d.is_horizontal() => vec![North, South],
        ('-', d) if !d.is_horizontal() => vec![West, East],
        (_, d) => vec![d],
    }
}

fn energized(grid: &SparseGrid<char>, entry: Beam) -> usize {
    let beams = reachable([entry], |&(pos, heading): &Beam| {
        deflect(*grid.get(pos), heading)
            .into_iter()
            .map(move |d| (pos + d, d))
            .filter(|&(next, _)| grid.in_bounds(next))
            .collect::<Vec<_>>()
    });
    beams.into_iter().map(|(pos, _)| pos).collect::<HashSet<_>>().len()
}

fn edge_entries(grid: &SparseGrid<char>) -> impl Iterator<Item = Beam> {
    let (w, h) = (grid.width(), grid.height());
    let columns = (0..w).flat_map(move |x| {
        [
            (Point::new(x, 0), Direction::South),
            (Point::new(x, h - 1), Direction::North),
        ]
    });
    let rows = (0..h).flat_map(move |y| {
        [
            (Point::new(0, y), Direction::East),
            (Point::new(w - 1, y), Direction::West),
        ]
    });
    columns.chain(rows)
}

impl AocParser for Solver {
    type SharedData = SparseGrid<char>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let grid = SparseGrid::try_parse(input, '.', '.', |c| {
            matches!(c, '/' | '\\' | '|' | '-').then_some(c)
        })
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if grid.width() == 0 {
            return Err(ParseError::MissingData("empty contraption".into()));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(energized(shared, (Point::ORIGIN, Direction::East)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        edge_entries(shared)
            .map(|entry| energized(shared, entry))
            .max()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no edge tiles".into()))
    }
}
