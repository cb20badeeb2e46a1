use anyhow::{anyhow, Context};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["parsing", "regex"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    fn fits_in(&self, bag: &Cubes) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Cubes) -> Cubes {
        Cubes {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug)]
pub struct Game {
    id: u32,
    handfuls: Vec<Cubes>,
}

const BAG: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

impl AocParser for Solver {
    type SharedData = Vec<Game>;

    fn parse(input: &str) -> Result<Self::SharedData, ParseError> {
        let game_re = Regex::new(r"^Game (\d+): (.*)$").map_err(|e| ParseError::Other(e.to_string()))?;
        let cube_re = Regex::new(r"^(\d+) (red|green|blue)$").map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(idx, line)| {
                parse_game(&game_re, &cube_re, line).with_context(|| format!("line {}", idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

fn parse_game(game_re: &Regex, cube_re: &Regex, line: &str) -> anyhow::Result<Game> {
    let caps = game_re
        .captures(line)
        .ok_or_else(|| anyhow!("expected 'Game N: ...'"))?;
    let id = caps[1].parse()?;
    let handfuls = caps[2]
        .split(';')
        .map(|handful| parse_handful(cube_re, handful.trim()))
        .collect::<anyhow::Result<_>>()?;
    Ok(Game { id, handfuls })
}

fn parse_handful(cube_re: &Regex, handful: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for part in handful.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let caps = cube_re
            .captures(part)
            .ok_or_else(|| anyhow!("bad cube count {part:?}"))?;
        let count: u32 = caps[1].parse()?;
        match &caps[2] {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            _ => cubes.blue += count,
        }
    }
    Ok(cubes)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|game| game.handfuls.iter().all(|h| h.fits_in(&BAG)))
            .map(|game| game.id)
            .sum::<u32>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|game| {
                game.handfuls
                    .iter()
                    .fold(Cubes::default(), |acc, h| acc.max(*h))
                    .power()
            })
            .sum::<u32>()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "8");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2286");
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let err = Solver::parse("Game 1: 3 blue\nGame x: 1 red").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{err}");
    }
}
