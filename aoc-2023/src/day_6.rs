//! Day 6: Wait For It

use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["math"])]
pub struct Solver;

/// The race sheet, kept as digit groups so part 2 can join them.
pub struct SharedData<'a> {
    times: Vec<&'a str>,
    distances: Vec<&'a str>,
}

/// Hold times `h` in `0..=time` with `h * (time - h) > record`.
///
/// The distance is symmetric around `time / 2`, so only the first winning
/// hold needs to be found.
pub fn ways_to_win(time: u64, record: u64) -> u64 {
    let distance = |hold: u64| hold * (time - hold);
    let half = time / 2;
    if distance(half) <= record {
        return 0;
    }

    let (mut lo, mut hi) = (0, half);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if distance(mid) > record {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    time - 2 * lo + 1
}

fn row<'a>(line: Option<&'a str>, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let values = line
        .and_then(|line| line.trim().strip_prefix(label))
        .ok_or_else(|| anyhow!("missing `{}` row", label))?
        .split_whitespace()
        .collect::<Vec<_>>();
    ensure!(
        values.iter().all(|v| v.bytes().all(|b| b.is_ascii_digit())),
        "`{}` row must only hold numbers",
        label
    );
    Ok(values)
}

fn parse_sheet(input: &str) -> anyhow::Result<SharedData<'_>> {
    let mut lines = input.lines().filter(|l| !l.trim().is_empty());
    let times = row(lines.next(), "Time:")?;
    let distances = row(lines.next(), "Distance:")?;
    ensure!(
        times.len() == distances.len(),
        "{} times but {} distances",
        times.len(),
        distances.len()
    );
    Ok(SharedData { times, distances })
}

fn race(time: &str, distance: &str) -> Result<u64, SolveError> {
    let time: u64 = time.parse().context("race time").map_err(SolveError::failed)?;
    let record: u64 = distance
        .parse()
        .context("race record")
        .map_err(SolveError::failed)?;
    Ok(ways_to_win(time, record))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_sheet(input).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .times
            .iter()
            .zip(&shared.distances)
            .map(|(time, distance)| race(time, distance))
            .product::<Result<u64, _>>()
            .map(|p| p.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        race(&shared.times.concat(), &shared.distances.concat()).map(|w| w.to_string())
    }
}
