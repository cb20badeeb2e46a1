//! Puzzle input sources

use crate::error::InputError;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Directory of puzzle inputs.
///
/// Lookup order: `{root}/{year}/dayNN.txt`, then `{root}/dayNN.txt`.
#[derive(Debug, Clone)]
pub struct InputDir {
    root: PathBuf,
}

impl InputDir {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Candidate paths for a year/day, in lookup order
    pub fn candidates(&self, year: u16, day: u8) -> [PathBuf; 2] {
        let file = format!("day{day:02}.txt");
        [self.root.join(year.to_string()).join(&file), self.root.join(file)]
    }

    /// First existing candidate path
    pub fn find(&self, year: u16, day: u8) -> Option<PathBuf> {
        self.candidates(year, day).into_iter().find(|p| p.is_file())
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.find(year, day).is_some()
    }

    pub fn read(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.find(year, day).ok_or_else(|| InputError::Missing {
            year,
            day,
            dir: self.root.clone(),
        })?;
        log::debug!("reading {year} day {day:02} from {}", path.display());
        read_file(&path)
    }
}

pub fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_stdin() -> Result<String, InputError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|source| InputError::Io {
            path: PathBuf::from("<stdin>"),
            source,
        })?;
    Ok(input)
}
