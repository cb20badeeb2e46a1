//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::{CliError, InputError};
use crate::inputs::{self, InputDir};
use std::path::{Path, PathBuf};

/// Where puzzle inputs come from
#[derive(Debug, Clone)]
pub enum InputSource {
    /// Whole input on stdin, one day only
    Stdin,
    /// A single file, one day only
    File(PathBuf),
    /// One file per day
    Directory(InputDir),
}

impl InputSource {
    /// Load the input for a year/day
    pub fn load(&self, year: u16, day: u8) -> Result<String, InputError> {
        match self {
            InputSource::Stdin => inputs::read_stdin(),
            InputSource::File(path) => inputs::read_file(path),
            InputSource::Directory(dir) => dir.read(year, day),
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, InputSource::Directory(_))
    }
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    pub source: InputSource,
    pub timings: bool,
    pub quiet: bool,
    pub verbosity: u8,
}

impl Config {
    /// Build config from CLI args
    ///
    /// `--input` wins over `--input-dir`; without either, stdin is read.
    /// Single-input sources need `--day`.
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let source = match (args.input, args.input_dir) {
            (Some(file), _) => InputSource::File(expand_tilde(&file)),
            (None, Some(dir)) => InputSource::Directory(InputDir::new(expand_tilde(&dir))),
            (None, None) => InputSource::Stdin,
        };

        if !source.is_directory() && args.day.is_none() {
            return Err(CliError::Config(
                "--day is required when reading a single input (stdin or --input)".to_string(),
            ));
        }

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            source,
            timings: args.timings,
            quiet: args.quiet,
            verbosity: args.verbose,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(args: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("aoc").chain(args.iter().copied()))
            .expect("valid arguments");
        Config::from_args(args)
    }

    #[test]
    fn test_stdin_needs_day() {
        assert!(matches!(parse(&[]), Err(CliError::Config(_))));

        let config = parse(&["--day", "6"]).unwrap();
        assert!(matches!(config.source, InputSource::Stdin));
        assert_eq!(config.year, 2023);
        assert_eq!(config.day_filter, Some(6));
        assert_eq!(config.part_filter, None);
    }

    #[test]
    fn test_input_file_wins_over_directory() {
        let config = parse(&["-d", "3", "--input", "a.txt", "--input-dir", "inputs"]).unwrap();
        assert!(matches!(config.source, InputSource::File(ref p) if p == Path::new("a.txt")));
    }

    #[test]
    fn test_directory_runs_every_day() {
        let config = parse(&["--input-dir", "inputs", "-t", "grid,bfs", "-vv", "--timings"]).unwrap();
        assert!(config.source.is_directory());
        assert_eq!(config.day_filter, None);
        assert_eq!(config.tags, vec!["grid", "bfs"]);
        assert_eq!(config.verbosity, 2);
        assert!(config.timings);
    }

    #[test]
    fn test_out_of_range_day_rejected() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--day", "0"]).is_err());
    }

    #[test]
    fn test_expand_tilde() {
        let plain = PathBuf::from("inputs/day01.txt");
        assert_eq!(expand_tilde(&plain), plain);
        assert_eq!(expand_tilde(Path::new("~user/x")), PathBuf::from("~user/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
