//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_solver::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver part
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ExecutorError>,
    /// Parse time, reported with the first part run for each solver
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs every selected solver in year/day order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone())
                .with_override(config.input_file.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each part's result to `emit` as soon as it is ready
    pub fn execute(&self, mut emit: impl FnMut(SolverResult)) {
        for work in self.collect_work_items() {
            self.run_solver(&work, &mut emit);
        }
    }

    /// Run a single solver for its selected parts
    fn run_solver(&self, work: &WorkItem, emit: &mut impl FnMut(SolverResult)) {
        let (year, day) = (work.year, work.day);
        log::info!("running {}/{:02}", year, day);

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("{}/{:02}: {}", year, day, e);
                return fail_parts(work, e.into(), emit);
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => return fail_parts(work, e.into(), emit),
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            emit(solve_part(year, day, part, &mut *solver, parse_duration.take()));
        }
    }
}

/// Emit the same error for every selected part of a solver that could not run
fn fail_parts(work: &WorkItem, error: ExecutorError, emit: &mut impl FnMut(SolverResult)) {
    for part in work.parts.clone() {
        emit(SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        });
    }
}

/// Solve a single part
fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration,
            answer: Ok(result.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(aoc_solver::SolverError::from(e).into()),
            parse_duration,
            solve_duration: TimeDelta::zero(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use log::LevelFilter;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const PIPE_MAZE: &str = ".....\n.S-7.\n.|.|.\n.L-J.\n.....\n";

    fn config(input_dir: PathBuf) -> Config {
        Config {
            year_filter: Some(2023),
            day_filter: Some(10),
            part_filter: None,
            tags: Vec::new(),
            input_dir,
            input_file: None,
            quiet: false,
            log_level: LevelFilter::Warn,
        }
    }

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_all_plugins()
            .unwrap()
            .build()
    }

    fn run(config: &Config) -> Vec<SolverResult> {
        let mut results = Vec::new();
        Executor::new(registry(), config).execute(|r| results.push(r));
        results
    }

    #[test]
    fn test_solves_each_part_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023_day10.txt"), PIPE_MAZE).unwrap();

        let results = run(&config(temp.path().to_path_buf()));
        let answers: Vec<(u8, String)> = results
            .iter()
            .map(|r| (r.part, r.answer.as_ref().unwrap().clone()))
            .collect();
        assert_eq!(answers, vec![(1, "4".to_string()), (2, "1".to_string())]);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn test_missing_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        let results = run(&config(temp.path().to_path_buf()));

        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(result.answer, Err(ExecutorError::Input(_))));
        }
    }

    #[test]
    fn test_parse_failure_fails_every_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023_day10.txt"), "..\n..\n").unwrap();

        let results = run(&config(temp.path().to_path_buf()));
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(result.answer, Err(ExecutorError::Solver(_))));
        }
    }

    #[test]
    fn test_part_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023_day10.txt"), PIPE_MAZE).unwrap();
        let config = Config {
            part_filter: Some(2),
            ..config(temp.path().to_path_buf())
        };

        let results = run(&config);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].part, 2);
        assert_eq!(results[0].answer.as_ref().unwrap(), "1");
        assert!(results[0].parse_duration.is_some());
    }

    #[test]
    fn test_collect_work_items_follows_filters() {
        let temp = TempDir::new().unwrap();
        let all = Config {
            day_filter: None,
            ..config(temp.path().to_path_buf())
        };
        let executor = Executor::new(registry(), &all);
        let days: Vec<u8> = executor.collect_work_items().iter().map(|w| w.day).collect();
        assert_eq!(days, (1..=11).collect::<Vec<_>>());

        let none = Config {
            year_filter: Some(2015),
            ..config(temp.path().to_path_buf())
        };
        assert!(Executor::new(registry(), &none).collect_work_items().is_empty());
    }
}
