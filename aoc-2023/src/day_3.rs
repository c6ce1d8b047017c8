//! Day 3: Gear Ratios

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["grid"])]
pub struct Solver;

/// A number in the schematic, spanning columns `start..end` of `row`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    pub value: u32,
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl PartNumber {
    fn touches(&self, row: usize, col: usize) -> bool {
        row + 1 >= self.row && row <= self.row + 1 && col + 1 >= self.start && col <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub symbol: char,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Default)]
pub struct Schematic {
    numbers: Vec<PartNumber>,
    symbols: Vec<Symbol>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let mut schematic = Schematic::default();

        for (row, line) in input.lines().map(str::trim).enumerate() {
            let mut current: Option<PartNumber> = None;
            for (col, c) in line.chars().enumerate() {
                if let Some(digit) = c.to_digit(10) {
                    let number = current.get_or_insert(PartNumber {
                        value: 0,
                        row,
                        start: col,
                        end: col,
                    });
                    number.value = number
                        .value
                        .checked_mul(10)
                        .and_then(|v| v.checked_add(digit))
                        .ok_or_else(|| {
                            ParseError::InvalidFormat(format!(
                                "(line {}) number too large at column {}",
                                row + 1,
                                number.start + 1
                            ))
                        })?;
                    number.end = col + 1;
                    continue;
                }

                schematic.numbers.extend(current.take());
                if c != '.' {
                    schematic.symbols.push(Symbol { symbol: c, row, col });
                }
            }
            schematic.numbers.extend(current.take());
        }

        if schematic.numbers.is_empty() {
            return Err(ParseError::MissingData("schematic has no numbers".into()));
        }
        Ok(schematic)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u32 = shared
            .numbers
            .iter()
            .filter(|n| shared.symbols.iter().any(|s| n.touches(s.row, s.col)))
            .map(|n| n.value)
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: u64 = shared
            .symbols
            .iter()
            .filter(|s| s.symbol == '*')
            .filter_map(|gear| {
                let adjacent: Vec<u64> = shared
                    .numbers
                    .iter()
                    .filter(|n| n.touches(gear.row, gear.col))
                    .map(|n| u64::from(n.value))
                    .collect();
                (adjacent.len() == 2).then(|| adjacent.iter().product::<u64>())
            })
            .sum();
        Ok(sum.to_string())
    }
}
