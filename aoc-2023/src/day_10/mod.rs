//! Day 10: Pipe Maze
//!
//! The start tile sits on a single closed loop of pipes. Part 1 is the
//! distance to the furthest loop tile, part 2 the number of tiles the loop
//! encloses.

use aoc_solver::{AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError};
use thiserror::Error;

mod enclosure;
mod grid;
mod tile;
mod tracer;

pub use enclosure::{LoopMap, RowScan, count_enclosed, scan_row};
pub use grid::{Grid, GridError, Position};
pub use tile::{Direction, InvalidTile, StartDirections, Tile, resolve_start_tile};
pub use tracer::{Step, TracedLoop, first_step, next_step, trace_loop, walk};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipeMazeError {
    #[error("maze has no start tile")]
    MissingStart,
    #[error("start tile connects to {found} pipes, expected exactly 2")]
    StartConnections { found: usize },
    #[error("loop breaks off at ({x}, {y})")]
    BrokenLoop { x: usize, y: usize },
    #[error("loop did not return to the start within {steps} steps")]
    LoopNotClosed { steps: usize },
    #[error("start tile shape could not be resolved")]
    UnresolvedStart,
    #[error("row {row} crosses the loop {crossings} times")]
    UnbalancedRow { row: usize, crossings: usize },
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 10, tags = ["grid", "graph"])]
pub struct Solver;

pub struct SharedData {
    grid: Grid,
    traced: Option<TracedLoop>,
}

impl SharedData {
    /// The traced loop, walked once and reused by both parts.
    fn traced(&mut self) -> Result<&TracedLoop, SolveError> {
        let traced = match self.traced.take() {
            Some(traced) => traced,
            None => trace_loop(&self.grid).map_err(SolveError::failed)?,
        };
        Ok(self.traced.insert(traced))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let grid: Grid = input
            .parse()
            .map_err(|e: GridError| ParseError::InvalidFormat(e.to_string()))?;
        grid.find_start()
            .map_err(|e| ParseError::MissingData(e.to_string()))?;

        Ok(SharedData { grid, traced: None })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.traced()?.furthest_steps().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let traced = shared.traced()?;
        let on_loop = traced.positions();
        let start_tile = traced.start_tile;
        count_enclosed(&shared.grid, &on_loop, start_tile)
            .map(|count| count.to_string())
            .map_err(SolveError::failed)
    }
}
