//! The traits a puzzle day implements

use crate::error::{ParseError, SolveError};

/// Turns a day's raw input into the data its parts work on.
///
/// `SharedData` may borrow from the input; day 6 keeps its race records as
/// `&str` slices, while the pipe maze owns a parsed grid.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// /// Race times and record distances, one column per race.
/// struct BoatRaces;
///
/// impl AocParser for BoatRaces {
///     type SharedData<'a> = Vec<(u64, u64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let mut rows = input.lines().map(|line| {
///             line.split_whitespace()
///                 .skip(1)
///                 .map(|n| n.parse::<u64>().map_err(|e| ParseError::InvalidFormat(e.to_string())))
///                 .collect::<Result<Vec<_>, _>>()
///         });
///         let (Some(times), Some(records)) = (rows.next(), rows.next()) else {
///             return Err(ParseError::MissingData("expected `Time:` and `Distance:` rows".into()));
///         };
///         Ok(times?.into_iter().zip(records?).collect())
///     }
/// }
///
/// let races = BoatRaces::parse("Time: 7 15\nDistance: 9 40").unwrap();
/// assert_eq!(races, vec![(7, 9), (15, 40)]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a day, answered from the parsed data.
///
/// The data is passed mutably so a part can cache work for the parts after it.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// /// Sums the first and last digit of every line.
/// struct Calibration;
///
/// impl AocParser for Calibration {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl PartSolver<1> for Calibration {
///     fn solve(lines: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let mut total = 0;
///         for line in lines.iter() {
///             let mut digits = line.chars().filter_map(|c| c.to_digit(10));
///             let first = digits.next().ok_or_else(|| SolveError::failed(format!("no digit in {:?}", line)))?;
///             total += first * 10 + digits.last().unwrap_or(first);
///         }
///         Ok(total.to_string())
///     }
/// }
///
/// let mut lines = Calibration::parse("1abc2\npqr3stu8vwx").unwrap();
/// assert_eq!(<Calibration as PartSolver<1>>::solve(&mut lines).unwrap(), "50");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A whole day: how many parts it has and how to run one by number.
///
/// `#[derive(AocSolver)]` writes this impl, dispatching each part number to
/// its [`PartSolver`]. Numbers in range without an impl return
/// [`SolveError::PartNotImplemented`].
pub trait Solver: AocParser {
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range checking on top of [`Solver::solve_part`], implemented for every solver.
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but part numbers outside `1..=PARTS`
    /// fail with [`SolveError::PartOutOfRange`] before reaching the solver.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        match part {
            1.. if part <= Self::PARTS => Self::solve_part(shared, part),
            _ => Err(SolveError::PartOutOfRange(part)),
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
