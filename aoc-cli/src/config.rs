//! Configuration resolution from CLI args

use crate::cli::Args;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Explicit input file, overriding the input directory
    pub input_file: Option<PathBuf>,
    /// Quiet mode
    pub quiet: bool,
    /// Log level requested with `-v`
    pub log_level: LevelFilter,
}

impl Config {
    /// Build config from CLI args, expanding `~` in paths
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            quiet: args.quiet,
            log_level: log_level(args.verbose),
        }
    }
}

/// Map the `-v` count onto a log level, starting from warnings
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(home) = dirs::home_dir()
    {
        if path_str == "~" {
            return home;
        }
        if let Some(rest) = path_str.strip_prefix("~/") {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("~/aoc/inputs")), home.join("aoc/inputs"));
        assert_eq!(expand_tilde(Path::new("inputs")), PathBuf::from("inputs"));
        assert_eq!(expand_tilde(Path::new("/tmp/~x")), PathBuf::from("/tmp/~x"));
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(log_level(0), LevelFilter::Warn);
        assert_eq!(log_level(1), LevelFilter::Info);
        assert_eq!(log_level(2), LevelFilter::Debug);
        assert_eq!(log_level(7), LevelFilter::Trace);
    }

    #[test]
    fn test_from_args() {
        let args = Args::try_parse_from([
            "aoc", "-y", "2023", "-d", "10", "-p", "2", "--input-dir", "/data/aoc", "-q",
        ])
        .unwrap();
        let config = Config::from_args(args);

        assert_eq!(config.year_filter, Some(2023));
        assert_eq!(config.day_filter, Some(10));
        assert_eq!(config.part_filter, Some(2));
        assert_eq!(config.input_dir, PathBuf::from("/data/aoc"));
        assert_eq!(config.input_file, None);
        assert!(config.quiet);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }
}
