//! Day 9: Mirage Maintenance

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use itertools::Itertools;

use crate::utils::{invalid_format, numbers, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 9, tags = ["math"])]
pub struct Solver;

/// The value after the last reading, found by repeated differencing.
///
/// `None` when the differences never settle to all zeros.
pub fn extrapolate(values: &[i64]) -> Option<i64> {
    let mut current = values.to_vec();
    let mut next = 0;
    while current.is_empty() || current.iter().any(|v| *v != 0) {
        next += *current.last()?;
        current = current.iter().tuple_windows().map(|(a, b)| b - a).collect();
    }
    Some(next)
}

/// The value before the first reading.
pub fn extrapolate_back(values: &[i64]) -> Option<i64> {
    let reversed: Vec<i64> = values.iter().rev().copied().collect();
    extrapolate(&reversed)
}

fn sum_extrapolated(
    histories: &[Vec<i64>],
    f: impl Fn(&[i64]) -> Option<i64>,
) -> Result<String, SolveError> {
    histories
        .iter()
        .enumerate()
        .map(|(idx, history)| {
            f(history).ok_or_else(|| {
                SolveError::failed(format!("history {} never settles to zeros", idx + 1))
            })
        })
        .sum::<Result<i64, _>>()
        .map(|sum| sum.to_string())
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i64>>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        parse_lines(input, numbers::<i64>).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_extrapolated(shared, extrapolate)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_extrapolated(shared, extrapolate_back)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
0 3 6 9 12 15
1 3 6 10 15 21
10 13 16 21 30 45
";

    #[test]
    fn next_values() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "114");
    }

    #[test]
    fn previous_values() {
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "2");
    }

    #[test]
    fn single_nonzero_reading_never_settles() {
        assert_eq!(extrapolate(&[7]), None);
        assert_eq!(extrapolate(&[0, 0]), Some(0));
    }

    proptest! {
        #[test]
        fn quadratics_extrapolate_exactly(
            a in -20i64..20,
            b in -20i64..20,
            c in -20i64..20,
            len in 4usize..12,
        ) {
            let f = |x: i64| a * x * x + b * x + c;
            let values: Vec<i64> = (0..len as i64).map(f).collect();
            prop_assert_eq!(extrapolate(&values), Some(f(len as i64)));
            prop_assert_eq!(extrapolate_back(&values), Some(f(-1)));
        }
    }
}
