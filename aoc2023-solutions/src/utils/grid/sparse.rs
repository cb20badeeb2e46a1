//! Sparse grids keyed by [`Point`].

use std::collections::HashMap;

use anyhow::{bail, Result};

use super::point::Point;

/// A mapping from [`Point`] to cell value that omits background cells.
///
/// Absent points read as the background value. The grid also remembers the
/// bounding width and height of the text it was parsed from, which
/// [`SparseGrid::get_wrapped`] uses to tile the grid infinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid<T> {
    cells: HashMap<Point, T>,
    background: T,
    width: i64,
    height: i64,
}

/// Rows of `input` with trailing blank lines removed. `lines` strips `\r`.
fn rows(input: &str) -> Vec<&str> {
    let mut rows: Vec<&str> = input.lines().collect();
    while rows.last().is_some_and(|row| row.trim().is_empty()) {
        rows.pop();
    }
    rows
}

impl<T: Clone + PartialEq> SparseGrid<T> {
    /// Empty grid with the given bounds.
    pub fn new(width: i64, height: i64, background: T) -> Self {
        Self {
            cells: HashMap::new(),
            background,
            width,
            height,
        }
    }

    /// Parse text, converting every non-background character with `convert`.
    ///
    /// `convert` returns `None` for characters it does not understand; the
    /// error names the character and its position.
    pub fn try_parse<F>(input: &str, background: char, blank: T, mut convert: F) -> Result<Self>
    where
        F: FnMut(char) -> Option<T>,
    {
        let rows = rows(input);
        let mut grid = Self::new(
            rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i64,
            rows.len() as i64,
            blank,
        );

        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == background {
                    continue;
                }
                let point = Point::new(x as i64, y as i64);
                match convert(ch) {
                    Some(value) => {
                        grid.insert(point, value);
                    }
                    None => bail!("unexpected character {:?} at {}", ch, point),
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    pub fn height(&self) -> i64 {
        self.height
    }

    pub fn background(&self) -> &T {
        &self.background
    }

    /// Number of explicitly stored (non-background) cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Whether `p` holds an explicit (non-background) value.
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains_key(&p)
    }

    pub fn get(&self, p: Point) -> &T {
        self.cells.get(&p).unwrap_or(&self.background)
    }

    /// Lookup on the grid repeated infinitely in every direction.
    pub fn get_wrapped(&self, p: Point) -> &T {
        if self.width == 0 || self.height == 0 {
            return &self.background;
        }
        self.get(Point::new(
            p.x.rem_euclid(self.width),
            p.y.rem_euclid(self.height),
        ))
    }

    /// Store a value, returning the previous explicit value.
    ///
    /// Writing the background value removes the cell.
    pub fn insert(&mut self, p: Point, value: T) -> Option<T> {
        if value == self.background {
            self.cells.remove(&p)
        } else {
            self.cells.insert(p, value)
        }
    }

    pub fn remove(&mut self, p: Point) -> Option<T> {
        self.cells.remove(&p)
    }

    /// Explicit cells in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells.iter().map(|(p, v)| (*p, v))
    }

    /// Smallest point (by `(x, y)` ordering) whose value satisfies `pred`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.cells
            .iter()
            .filter(|(_, v)| pred(v))
            .map(|(p, _)| *p)
            .min()
    }

    /// All points whose value satisfies `pred`, sorted.
    pub fn find_all(&self, mut pred: impl FnMut(&T) -> bool) -> Vec<Point> {
        let mut points: Vec<Point> = self
            .cells
            .iter()
            .filter(|(_, v)| pred(v))
            .map(|(p, _)| *p)
            .collect();
        points.sort_unstable();
        points
    }

    /// Render the bounded area back to text, one line per row.
    pub fn render(&self, mut to_char: impl FnMut(&T) -> char) -> String {
        let mut out = String::with_capacity(((self.width + 1) * self.height).max(0) as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(to_char(self.get(Point::new(x, y))));
            }
            out.push('\n');
        }
        out
    }
}

impl SparseGrid<char> {
    /// Parse text into a character grid, skipping `background` cells.
    pub fn parse(input: &str, background: char) -> Self {
        let rows = rows(input);
        let mut grid = Self::new(
            rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i64,
            rows.len() as i64,
            background,
        );
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch != background {
                    grid.cells.insert(Point::new(x as i64, y as i64), ch);
                }
            }
        }
        grid
    }
}
