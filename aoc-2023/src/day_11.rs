//! Day 11: Cosmic Expansion

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 11, tags = ["grid", "math"])]
pub struct Solver;

/// Galaxy positions as `(column, row)` in the unexpanded image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    galaxies: Vec<(usize, usize)>,
    width: usize,
    height: usize,
}

impl Image {
    /// Each galaxy's coordinate along one axis after every empty line grows to `factor` lines.
    fn expanded_axis(
        &self,
        size: usize,
        coord: impl Fn(&(usize, usize)) -> usize,
        factor: u64,
    ) -> Vec<u64> {
        let mut occupied = vec![false; size];
        for galaxy in &self.galaxies {
            occupied[coord(galaxy)] = true;
        }

        let mut empty_before = Vec::with_capacity(size);
        let mut empty = 0u64;
        for is_occupied in &occupied {
            empty_before.push(empty);
            if !is_occupied {
                empty += 1;
            }
        }

        self.galaxies
            .iter()
            .map(|galaxy| {
                let c = coord(galaxy);
                c as u64 + empty_before[c] * factor.saturating_sub(1)
            })
            .collect()
    }
}

/// Sum of `|a - b|` over all unordered pairs.
fn pairwise_distance(mut coords: Vec<u64>) -> u64 {
    coords.sort_unstable();
    let mut prefix = 0;
    coords
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let d = c * i as u64 - prefix;
            prefix += c;
            d
        })
        .sum()
}

/// Sum of Manhattan distances between every pair of galaxies once empty rows
/// and columns are `factor` times as wide.
pub fn sum_distances(image: &Image, factor: u64) -> u64 {
    let xs = image.expanded_axis(image.width, |g| g.0, factor);
    let ys = image.expanded_axis(image.height, |g| g.1, factor);
    pairwise_distance(xs) + pairwise_distance(ys)
}

fn parse_image(input: &str) -> anyhow::Result<Image> {
    let rows: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let width = rows.first().map(|r| r.len()).ok_or_else(|| anyhow!("empty image"))?;

    let mut galaxies = Vec::new();
    for (y, row) in rows.iter().enumerate() {
        ensure!(
            row.len() == width,
            "(line {}) row width {} differs from {}",
            y + 1,
            row.len(),
            width
        );
        for (x, c) in row.bytes().enumerate() {
            match c {
                b'#' => galaxies.push((x, y)),
                b'.' => {}
                other => return Err(anyhow!("(line {}) unexpected {:?}", y + 1, other as char)),
            }
        }
    }

    log::debug!(
        "image {}x{} with {} galaxies, {} pairs",
        width,
        rows.len(),
        galaxies.len(),
        galaxies.len() * galaxies.len().saturating_sub(1) / 2
    );
    Ok(Image {
        galaxies,
        width,
        height: rows.len(),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Image;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_image(input).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_distances(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(sum_distances(shared, 1_000_000).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;
    use itertools::Itertools;

    const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

    fn image() -> Image {
        parse_image(EXAMPLE).unwrap()
    }

    #[test]
    fn doubled_space() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "374");
    }

    #[test]
    fn larger_factors() {
        assert_eq!(sum_distances(&image(), 10), 1030);
        assert_eq!(sum_distances(&image(), 100), 8410);
    }

    #[test]
    fn matches_pairwise_manhattan_sum() {
        let image = image();
        let xs = image.expanded_axis(image.width, |g| g.0, 2);
        let ys = image.expanded_axis(image.height, |g| g.1, 2);
        let brute: u64 = xs
            .iter()
            .zip(&ys)
            .tuple_combinations()
            .map(|((x1, y1), (x2, y2))| x1.abs_diff(*x2) + y1.abs_diff(*y2))
            .sum();
        assert_eq!(brute, 374);
    }
}
