use std::collections::HashMap;

use anyhow::{bail, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 14, tags = ["grid", "cycle"])]
pub struct Solver;

const SPIN_CYCLES: usize = 1_000_000_000;

/// Rows of `.` (empty), `O` (rounded rock) and `#` (cube rock).
pub type Platform = Vec<Vec<u8>>;

fn parse_platform(input: &str) -> anyhow::Result<Platform> {
    let rows: Platform = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(|l| l.as_bytes().to_vec())
        .collect();
    let width = rows.first().map_or(0, Vec::len);
    if width == 0 {
        bail!("empty platform");
    }
    if rows.iter().any(|r| r.len() != width) {
        bail!("platform rows differ in length");
    }
    for (y, row) in rows.iter().enumerate() {
        check_row(row).with_context(|| format!("row {}", y + 1))?;
    }
    Ok(rows)
}

fn check_row(row: &[u8]) -> anyhow::Result<()> {
    if let Some(bad) = row.iter().find(|c| !b".O#".contains(c)) {
        bail!("unexpected {:?}", *bad as char);
    }
    Ok(())
}

/// Roll every rounded rock as far north as it goes.
fn tilt_north(platform: &mut Platform) {
    let width = platform.first().map_or(0, Vec::len);
    for x in 0..width {
        let mut free = 0;
        for y in 0..platform.len() {
            match platform[y][x] {
                b'#' => free = y + 1,
                b'O' => {
                    platform[y][x] = b'.';
                    platform[free][x] = b'O';
                    free += 1;
                }
                _ => {}
            }
        }
    }
}

fn rotate_clockwise(platform: &Platform) -> Platform {
    let height = platform.len();
    let width = platform.first().map_or(0, Vec::len);
    (0..width)
        .map(|x| (0..height).rev().map(|y| platform[y][x]).collect())
        .collect()
}

/// Tilt north, west, south, then east.
fn spin_cycle(platform: &mut Platform) {
    for _ in 0..4 {
        tilt_north(platform);
        *platform = rotate_clockwise(platform);
    }
}

fn north_load(platform: &Platform) -> usize {
    let height = platform.len();
    platform
        .iter()
        .enumerate()
        .map(|(y, row)| (height - y) * row.iter().filter(|&&c| c == b'O').count())
        .sum()
}

/// Load after `cycles` spin cycles, skipping ahead once the platform repeats.
fn load_after(platform: &Platform, cycles: usize) -> usize {
    let mut platform = platform.clone();
    let mut seen: HashMap<Platform, usize> = HashMap::new();
    let mut step = 0;
    while step < cycles {
        if let Some(&first) = seen.get(&platform) {
            let period = step - first;
            log::debug!("platform repeats every {period} cycles from cycle {first}");
            for _ in 0..(cycles - step) % period {
                spin_cycle(&mut platform);
            }
            return north_load(&platform);
        }
        seen.insert(platform.clone(), step);
        spin_cycle(&mut platform);
        step += 1;
    }
    north_load(&platform)
}

impl AocParser for Solver {
    type SharedData = Platform;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        parse_platform(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        let mut tilted = shared.clone();
        tilt_north(&mut tilted);
        Ok(north_load(&tilted).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(load_after(shared, SPIN_CYCLES).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "136");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "64");
    }

    #[test]
    fn test_one_spin_cycle() {
        let mut platform = parse_platform(EXAMPLE).unwrap();
        spin_cycle(&mut platform);
        let expected = parse_platform(
            ".....#....\n....#...O#\n...OO##...\n.OO#......\n.....OOO#.\n\
             .O#...O#.#\n....O#....\n......OOOO\n#...O###..\n#..OO#....",
        )
        .unwrap();
        assert_eq!(platform, expected);
    }

    #[test]
    fn test_rotation_round_trips() {
        let platform = parse_platform("O.#\n.#O").unwrap();
        let rotated = (0..4).fold(platform.clone(), |p, _| rotate_clockwise(&p));
        assert_eq!(rotated, platform);
        assert_eq!(rotate_clockwise(&platform), parse_platform(".O\n#.\nO#").unwrap());
    }

    #[test]
    fn test_parse_error_names_row() {
        let err = Solver::parse("O.#\n.x.\n").unwrap_err();
        let ParseError::InvalidFormat(msg) = err else {
            panic!("unexpected error {err:?}");
        };
        assert!(msg.contains("row 2"), "{msg}");
        assert!(msg.contains("'x'"), "{msg}");
    }
}
