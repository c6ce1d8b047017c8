//! Day 4: Scratchcards

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::{invalid_format, numbers, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["parsing"])]
pub struct Solver;

/// Count of winning numbers on each card, in card order.
pub struct SharedData {
    matches: Vec<usize>,
}

fn parse_card(line: &str) -> anyhow::Result<usize> {
    let (_, numbers_part) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing `:` after card id"))?;
    let (winning, have) = numbers_part
        .split_once('|')
        .ok_or_else(|| anyhow!("missing `|` between number lists"))?;
    let winning: Vec<u32> = numbers(winning).context("winning numbers")?;
    let have: Vec<u32> = numbers(have).context("card numbers")?;
    Ok(have.iter().filter(|n| winning.contains(n)).count())
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let matches = parse_lines(input, parse_card).map_err(invalid_format)?;
        Ok(SharedData { matches })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let points = shared
            .matches
            .iter()
            .enumerate()
            .filter(|(_, m)| **m > 0)
            .try_fold(0u64, |total, (idx, m)| {
                u32::try_from(m - 1)
                    .ok()
                    .and_then(|shift| 1u64.checked_shl(shift))
                    .and_then(|worth| total.checked_add(worth))
                    .ok_or_else(|| {
                        SolveError::failed(format!("card {} is worth more than u64 points", idx + 1))
                    })
            })?;
        Ok(points.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut copies = vec![1u64; shared.matches.len()];
        for (idx, matches) in shared.matches.iter().enumerate() {
            let won = copies[idx];
            for next in copies.iter_mut().skip(idx + 1).take(*matches) {
                *next = next.checked_add(won).ok_or_else(|| too_many_copies(idx))?;
            }
        }
        copies
            .iter()
            .try_fold(0u64, |total, n| total.checked_add(*n))
            .map(|total| total.to_string())
            .ok_or_else(|| too_many_copies(copies.len() - 1))
    }
}

fn too_many_copies(idx: usize) -> SolveError {
    SolveError::failed(format!("copy count overflows u64 at card {}", idx + 1))
}
