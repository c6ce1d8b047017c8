//! Helpers shared by the day parsers.

use std::str::FromStr;

use anyhow::{Context, anyhow};
use aoc_solver::ParseError;

#[cfg(test)]
pub(crate) mod testing;

/// Turns a parser failure into the framework's error, keeping the context chain.
pub(crate) fn invalid_format(err: anyhow::Error) -> ParseError {
    ParseError::InvalidFormat(format!("{:#}", err))
}

/// Parses every whitespace separated number in `s`.
pub(crate) fn numbers<T>(s: &str) -> anyhow::Result<Vec<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    s.split_whitespace()
        .map(|word| {
            word.parse::<T>()
                .with_context(|| format!("invalid number {:?}", word))
        })
        .collect()
}

/// Parses each non-empty line with `f`, prefixing errors with the line number.
pub(crate) fn parse_lines<T>(
    input: &str,
    mut f: impl FnMut(&str) -> anyhow::Result<T>,
) -> anyhow::Result<Vec<T>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| f(line.trim()).map_err(|e| anyhow!("(line {}) {:#}", idx + 1, e)))
        .collect()
}
