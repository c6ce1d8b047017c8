//! Day 5: If You Give A Seed A Fertilizer

use anyhow::{Context, anyhow, bail, ensure};
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

use crate::utils::{invalid_format, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["ranges"])]
pub struct Solver;

/// `len` numbers starting at `src` map to the same count starting at `dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapRange {
    pub dst: u64,
    pub src: u64,
    pub len: u64,
}

impl MapRange {
    fn src_end(&self) -> u64 {
        self.src + self.len
    }

    fn translate(&self, n: u64) -> u64 {
        n - self.src + self.dst
    }
}

/// One `x-to-y map:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub from: String,
    pub to: String,
    pub ranges: Vec<MapRange>,
}

impl Stage {
    pub fn lookup(&self, n: u64) -> u64 {
        self.ranges
            .iter()
            .find(|r| (r.src..r.src_end()).contains(&n))
            .map_or(n, |r| r.translate(n))
    }

    /// Maps half-open intervals through this stage, splitting them at range edges.
    pub fn lookup_intervals(&self, intervals: Vec<(u64, u64)>) -> Vec<(u64, u64)> {
        let mut pending = intervals;
        let mut mapped = Vec::new();

        for range in &self.ranges {
            let (rs, re) = (range.src, range.src_end());
            let mut rest = Vec::new();
            for (start, end) in pending {
                if start < rs.min(end) {
                    rest.push((start, rs.min(end)));
                }
                let (os, oe) = (start.max(rs), end.min(re));
                if os < oe {
                    mapped.push((range.translate(os), range.translate(oe - 1) + 1));
                }
                if re.max(start) < end {
                    rest.push((re.max(start), end));
                }
            }
            pending = rest;
        }

        mapped.extend(pending);
        mapped
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac {
    pub seeds: Vec<u64>,
    /// Stages ordered from `seed` to `location`.
    pub stages: Vec<Stage>,
}

impl Almanac {
    pub fn location(&self, seed: u64) -> u64 {
        self.stages.iter().fold(seed, |n, stage| stage.lookup(n))
    }
}

fn parse_stage(block: &str) -> anyhow::Result<Stage> {
    let mut lines = block.lines().map(str::trim).filter(|l| !l.is_empty());
    let header = lines.next().ok_or_else(|| anyhow!("empty map block"))?;
    let (from, to) = header
        .strip_suffix(" map:")
        .and_then(|names| names.split_once("-to-"))
        .ok_or_else(|| anyhow!("malformed map header {:?}", header))?;

    let ranges = lines
        .map(|line| match numbers::<u64>(line)?.as_slice() {
            [dst, src, len] => {
                ensure!(
                    src.checked_add(*len).is_some() && dst.checked_add(*len).is_some(),
                    "range {:?} runs past u64::MAX",
                    line
                );
                Ok(MapRange {
                    dst: *dst,
                    src: *src,
                    len: *len,
                })
            }
            _ => bail!("expected `dst src len`, got {:?}", line),
        })
        .collect::<anyhow::Result<_>>()
        .with_context(|| format!("{}-to-{} map", from, to))?;

    Ok(Stage {
        from: from.to_string(),
        to: to.to_string(),
        ranges,
    })
}

/// Orders the stages into the chain `seed -> ... -> location`.
fn chain(mut stages: Vec<Stage>) -> anyhow::Result<Vec<Stage>> {
    let mut ordered = Vec::with_capacity(stages.len());
    let mut category = "seed".to_string();
    while category != "location" {
        let idx = stages
            .iter()
            .position(|s| s.from == category)
            .ok_or_else(|| anyhow!("no map from {:?}", category))?;
        let stage = stages.swap_remove(idx);
        category = stage.to.clone();
        ordered.push(stage);
    }
    Ok(ordered)
}

fn parse_almanac(input: &str) -> anyhow::Result<Almanac> {
    let input = input.replace("\r\n", "\n");
    let mut blocks = input.split("\n\n");
    let seeds = blocks
        .next()
        .and_then(|line| line.trim().strip_prefix("seeds:"))
        .ok_or_else(|| anyhow!("missing `seeds:` line"))?;
    let seeds = numbers(seeds).context("seeds")?;
    let stages = blocks
        .filter(|block| !block.trim().is_empty())
        .map(parse_stage)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Almanac {
        seeds,
        stages: chain(stages)?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let almanac = parse_almanac(input).map_err(invalid_format)?;
        log::debug!(
            "almanac: {} seeds, stages {}",
            almanac.seeds.len(),
            almanac
                .stages
                .iter()
                .map(|s| format!("{}->{} ({} ranges)", s.from, s.to, s.ranges.len()))
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(almanac)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|seed| shared.location(*seed))
            .min()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("no seeds listed"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.seeds.len() % 2 != 0 {
            return Err(SolveError::failed("seed ranges need an even count of numbers"));
        }
        let mut seeds: Vec<(u64, u64)> = Vec::new();
        for pair in shared.seeds.chunks_exact(2) {
            let (start, len) = (pair[0], pair[1]);
            let end = start.checked_add(len).ok_or_else(|| {
                SolveError::failed(format!("seed range {} {} runs past u64::MAX", start, len))
            })?;
            if start < end {
                seeds.push((start, end));
            }
        }

        shared
            .stages
            .iter()
            .fold(seeds, |intervals, stage| stage.lookup_intervals(intervals))
            .into_iter()
            .map(|(start, _)| start)
            .min()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("no seed ranges listed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::{parse_error, solve, solve_error};
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    #[test]
    fn lowest_location_of_seeds() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "35");
    }

    #[test]
    fn lowest_location_of_seed_ranges() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "46");
    }

    #[test]
    fn unmapped_numbers_pass_through() {
        let almanac = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(almanac.stages[0].lookup(10), 10);
        assert_eq!(almanac.stages[0].lookup(98), 50);
        assert_eq!(almanac.location(79), 82);
    }

    #[test]
    fn broken_chain_is_rejected() {
        let err = parse_error::<Solver>("seeds: 1\n\nseed-to-soil map:\n1 2 3\n");
        assert!(err.to_string().contains("soil"), "{}", err);
    }

    #[test]
    fn map_ranges_past_u64_max_are_rejected() {
        let input = format!(
            "seeds: 1\n\nseed-to-location map:\n0 {} 2\n",
            u64::MAX - 1
        );
        let err = parse_error::<Solver>(&input);
        assert!(matches!(err, ParseError::InvalidFormat(_)));
        assert!(err.to_string().contains("u64::MAX"), "{}", err);

        let input = format!("seeds: 1\n\nseed-to-location map:\n{} 0 2\n", u64::MAX);
        assert!(matches!(parse_error::<Solver>(&input), ParseError::InvalidFormat(_)));
    }

    #[test]
    fn range_ending_exactly_at_u64_max_is_accepted() {
        let input = format!(
            "seeds: {} 1\n\nseed-to-location map:\n7 {} 1\n9 1 1\n",
            u64::MAX - 1,
            u64::MAX - 1
        );
        assert_eq!(solve::<Solver>(&input, 1), "7");
        assert_eq!(solve::<Solver>(&input, 2), "7");
    }

    #[test]
    fn seed_ranges_past_u64_max_are_an_error() {
        let input = format!("seeds: {} 5\n\nseed-to-location map:\n0 0 1\n", u64::MAX - 1);
        let err = solve_error::<Solver>(&input, 2);
        assert!(matches!(err, SolveError::SolveFailed(_)));
    }

    proptest! {
        #[test]
        fn interval_mapping_agrees_with_point_lookups(
            start in 0u64..120,
            len in 1u64..40,
        ) {
            let almanac = Solver::parse(EXAMPLE).unwrap();
            let intervals = almanac
                .stages
                .iter()
                .fold(vec![(start, start + len)], |acc, stage| stage.lookup_intervals(acc));

            let total: u64 = intervals.iter().map(|(s, e)| e - s).sum();
            prop_assert_eq!(total, len);

            let lowest = (start..start + len).map(|seed| almanac.location(seed)).min();
            prop_assert_eq!(intervals.iter().map(|(s, _)| *s).min(), lowest);
        }
    }
}
