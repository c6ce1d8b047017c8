use aoc_solver::{ParseError, SolveError, Solver, SolverExt};

/// Parses `input` and solves `part`, panicking on any failure.
pub(crate) fn solve<S: Solver>(input: &str, part: u8) -> String {
    let mut shared = match S::parse(input) {
        Ok(shared) => shared,
        Err(e) => panic!("parse failed: {}", e),
    };
    match S::solve_part_checked_range(&mut shared, part) {
        Ok(answer) => answer,
        Err(e) => panic!("part {} failed: {}", part, e),
    }
}

pub(crate) fn parse_error<S: Solver>(input: &str) -> ParseError {
    match S::parse(input) {
        Ok(_) => panic!("expected {:?} to be rejected", input),
        Err(e) => e,
    }
}

/// Parses `input` and expects `part` to fail.
pub(crate) fn solve_error<S: Solver>(input: &str, part: u8) -> SolveError {
    let mut shared = match S::parse(input) {
        Ok(shared) => shared,
        Err(e) => panic!("parse failed: {}", e),
    };
    match S::solve_part_checked_range(&mut shared, part) {
        Ok(answer) => panic!("expected part {} to fail, got {}", part, answer),
        Err(e) => e,
    }
}
