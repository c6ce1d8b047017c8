//! Parsed puzzle inputs behind a type-erased, timed interface

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{TimeDelta, Utc};

/// Runs `f` and measures its wall-clock time.
fn timed<T>(f: impl FnOnce() -> T) -> (T, TimeDelta) {
    let start = Utc::now();
    let value = f();
    (value, Utc::now() - start)
}

/// One answered part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub duration: TimeDelta,
}

/// A day's input, parsed once and shared by every part run against it.
///
/// Parts take the shared data mutably, so a later part can reuse whatever an
/// earlier one cached (day 10 keeps its traced loop there).
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_duration: TimeDelta,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let (shared, parse_duration) = timed(|| S::parse(input));
        Ok(Self {
            year,
            day,
            shared: shared?,
            parse_duration,
        })
    }
}

/// Object-safe view of a [`SolverInstance`], as handed out by the registry.
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn report(solver: &mut dyn DynSolver) {
///     println!("{}/{:02} parsed in {}", solver.year(), solver.day(), solver.parse_duration());
///     for part in 1..=solver.parts() {
///         match solver.solve(part) {
///             Ok(result) => println!("part {}: {} ({})", result.part, result.answer, result.duration),
///             Err(e) => eprintln!("part {}: {}", part, e),
///         }
///     }
/// }
/// ```
pub trait DynSolver {
    /// Runs one part; parts outside `1..=parts()` are `PartOutOfRange`.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta;
}

impl<S: Solver> DynSolver for SolverInstance<'_, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let (answer, duration) = timed(|| S::solve_part_checked_range(&mut self.shared, part));
        Ok(SolveResult {
            part,
            answer: answer?,
            duration,
        })
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_duration
    }
}
