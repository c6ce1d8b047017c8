//! Error types for the CLI

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// One or more parts failed
    #[error("{failed} of {total} part(s) failed")]
    PartsFailed { failed: usize, total: usize },
}

/// Input loading errors
#[derive(Error, Debug)]
pub enum InputError {
    /// Input file does not exist
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Input file exists but could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a single part produced no answer
///
/// Errors hit before solving (missing input, parse failure) are shared by
/// every part of the solver.
#[derive(Error, Debug, Clone)]
pub enum ExecutorError {
    /// Input could not be loaded
    #[error(transparent)]
    Input(Arc<InputError>),

    /// Solver lookup, parsing or solving failed
    #[error(transparent)]
    Solver(Arc<aoc_solver::SolverError>),
}

impl From<InputError> for ExecutorError {
    fn from(e: InputError) -> Self {
        Self::Input(Arc::new(e))
    }
}

impl From<aoc_solver::SolverError> for ExecutorError {
    fn from(e: aoc_solver::SolverError) -> Self {
        Self::Solver(Arc::new(e))
    }
}
