//! Puzzle inputs read from local files

use crate::error::InputError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read-only store of puzzle inputs
///
/// Directory structure: `{input_dir}/{year}_day{day:02}.txt`. An explicit
/// override file, when set, is returned for every year/day.
pub struct InputStore {
    input_dir: PathBuf,
    override_file: Option<PathBuf>,
}

impl InputStore {
    /// Create a store reading from `input_dir`
    pub fn new(input_dir: PathBuf) -> Self {
        Self {
            input_dir,
            override_file: None,
        }
    }

    /// Serve `file` for every year/day instead of looking in the directory
    pub fn with_override(mut self, file: Option<PathBuf>) -> Self {
        self.override_file = file;
        self
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some(file) => file.clone(),
            None => self.input_dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        log::debug!("reading input {}", path.display());
        read(&path)
    }
}

fn read(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}
