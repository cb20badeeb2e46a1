use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{bfs_distances, Point, SparseGrid};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 21, tags = ["grid", "bfs", "math"])]
pub struct Solver;

const SHORT_WALK: usize = 64;
const LONG_WALK: usize = 26_501_365;

#[derive(Debug)]
pub struct Garden {
    /// Rocks only; garden plots are background.
    rocks: SparseGrid<char>,
    start: Point,
}

impl Garden {
    /// Plots reachable in exactly `steps` steps on the infinitely tiled map.
    fn plots_after(&self, steps: usize) -> u64 {
        let distances = bfs_distances(self.start, Some(steps), |&p: &Point| {
            p.orthogonal_neighbours()
                .filter(|&n| *self.rocks.get_wrapped(n) != '#')
                .collect::<Vec<_>>()
        });
        distances.values().filter(|&&d| d % 2 == steps % 2).count() as u64
    }

    /// Same count for a step total too large to walk, via a quadratic in
    /// the number of whole map widths covered.
    ///
    /// Needs a square map with the start in its centre.
    fn extrapolated_plots_after(&self, steps: usize) -> Result<u64, SolveError> {
        let size = self.rocks.width();
        if size != self.rocks.height() || self.start != Point::new(size / 2, size / 2) {
            return Err(SolveError::SolveFailed(
                "extrapolation needs a square map with the start in its centre".into(),
            ));
        }
        let size = size as usize;
        let offset = steps % size;
        let widths = (steps / size) as u64;
        if widths < 3 {
            return Ok(self.plots_after(steps));
        }

        let samples: Vec<u64> = (0..3).map(|k| self.plots_after(offset + k * size)).collect();
        log::debug!("plots after {offset} + k*{size} steps for k = 0..3: {samples:?}");
        Ok(newton_quadratic(&samples, widths))
    }
}

/// Evaluate at `x` the quadratic through `(0, y0)`, `(1, y1)`, `(2, y2)`.
fn newton_quadratic(samples: &[u64], x: u64) -> u64 {
    let [y0, y1, y2] = [samples[0] as i128, samples[1] as i128, samples[2] as i128];
    let d1 = y1 - y0;
    let d2 = y2 - 2 * y1 + y0;
    let x = x as i128;
    (y0 + d1 * x + d2 * x * (x - 1) / 2) as u64
}

impl AocParser for Solver {
    type SharedData = Garden;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let mut rocks =
            SparseGrid::try_parse(input, '.', '.', |c| matches!(c, '#' | 'S').then_some(c))
                .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        let start = rocks
            .find(|&c| c == 'S')
            .ok_or_else(|| ParseError::MissingData("no 'S' tile".into()))?;
        rocks.remove(start);
        Ok(Garden { rocks, start })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared.plots_after(SHORT_WALK).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        shared.extrapolated_plots_after(LONG_WALK).map(|n| n.to_string())
    }
}
