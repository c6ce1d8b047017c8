//! Day 1: Trebuchet?!

use anyhow::anyhow;
use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["parsing"])]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".into()));
        }
        Ok(lines)
    }
}

/// The digit starting at byte `idx` of `line`, optionally also matching spelled-out names.
fn digit_at(line: &str, idx: usize, spelled: bool) -> Option<u32> {
    let rest = &line[idx..];
    let digit = rest.chars().next()?.to_digit(10);
    if digit.is_some() || !spelled {
        return digit;
    }
    SPELLED
        .iter()
        .position(|name| rest.starts_with(name))
        .map(|pos| pos as u32 + 1)
}

/// First digit times ten plus last digit. Spelled names may overlap (`twone`).
pub fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let mut digits = line
        .char_indices()
        .filter_map(|(idx, _)| digit_at(line, idx, spelled));
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(first * 10 + last)
}

fn sum_calibration(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            calibration_value(line, spelled)
                .ok_or_else(|| anyhow!("(line {}) no digit in {:?}", idx + 1, line))
        })
        .sum::<anyhow::Result<u32>>()
        .map(|total| total.to_string())
        .map_err(SolveError::failed)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_calibration(shared, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::solve;

    const DIGITS: &str = "1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet\n";
    const SPELLED_OUT: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn digits_only() {
        assert_eq!(solve::<Solver>(DIGITS, 1), "142");
    }

    #[test]
    fn spelled_digits() {
        assert_eq!(solve::<Solver>(SPELLED_OUT, 2), "281");
    }

    #[test]
    fn overlapping_names_count_both() {
        assert_eq!(calibration_value("twone", true), Some(21));
        assert_eq!(calibration_value("eighthree", true), Some(83));
        assert_eq!(calibration_value("twone", false), None);
    }

    #[test]
    fn line_without_digit_fails_the_part() {
        let mut shared = Solver::parse("abc\n1x2").unwrap();
        let err = <Solver as PartSolver<1>>::solve(&mut shared).unwrap_err();
        assert!(err.to_string().contains("line 1"), "{}", err);
    }
}
