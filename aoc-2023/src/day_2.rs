//! Day 2: Cube Conundrum

use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use regex::Regex;

use crate::utils::{invalid_format, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["parsing"])]
pub struct Solver;

static GAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Game (\d+):(.*)$").expect("valid game regex"));
static CUBES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+) (red|green|blue)$").expect("valid cube regex"));

/// Cubes of each colour shown in one draw, or the most seen in a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cubes {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Cubes {
    const BAG: Cubes = Cubes {
        red: 12,
        green: 13,
        blue: 14,
    };

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

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<Cubes>,
}

impl Game {
    fn minimum_bag(&self) -> Cubes {
        self.draws.iter().copied().fold(Cubes::default(), Cubes::max)
    }
}

fn parse_draw(draw: &str) -> anyhow::Result<Cubes> {
    let mut cubes = Cubes::default();
    for part in draw.split(',').map(str::trim) {
        let caps = CUBES
            .captures(part)
            .ok_or_else(|| anyhow!("malformed cube count {:?}", part))?;
        let count: u32 = caps[1].parse().context("cube count")?;
        match &caps[2] {
            "red" => cubes.red += count,
            "green" => cubes.green += count,
            _ => cubes.blue += count,
        }
    }
    Ok(cubes)
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let caps = GAME
        .captures(line)
        .ok_or_else(|| anyhow!("expected `Game N: ...`"))?;
    let id = caps[1].parse().context("game id")?;
    let draws = caps[2]
        .split(';')
        .map(parse_draw)
        .collect::<anyhow::Result<_>>()?;
    Ok(Game { id, draws })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, parse_game).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_in(&Cubes::BAG)))
            .map(|game| game.id)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared.iter().map(|game| game.minimum_bag().power()).sum();
        Ok(sum.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{parse_error, solve};

    const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

    #[test]
    fn possible_games() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "8");
    }

    #[test]
    fn minimum_bag_power() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "2286");
    }

    #[test]
    fn parses_draws() {
        let game = parse_game("Game 7: 3 blue, 4 red; 2 green").unwrap();
        assert_eq!(game.id, 7);
        assert_eq!(
            game.draws,
            vec![
                Cubes {
                    red: 4,
                    green: 0,
                    blue: 3,
                },
                Cubes {
                    red: 0,
                    green: 2,
                    blue: 0,
                },
            ]
        );
    }

    #[test]
    fn unknown_colour_is_rejected() {
        let err = parse_error::<Solver>("Game 1: 3 purple");
        assert!(err.to_string().contains("line 1"), "{}", err);
    }
}
