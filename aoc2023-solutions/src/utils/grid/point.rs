//! Integer 2D coordinates and compass directions.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A lattice point. `y` grows downward, so north is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const NORTH: Point = Point::new(0, -1);
    pub const SOUTH: Point = Point::new(0, 1);
    pub const EAST: Point = Point::new(1, 0);
    pub const WEST: Point = Point::new(-1, 0);

    pub const NORTH_EAST: Point = Point::new(1, -1);
    pub const NORTH_WEST: Point = Point::new(-1, -1);
    pub const SOUTH_EAST: Point = Point::new(1, 1);
    pub const SOUTH_WEST: Point = Point::new(-1, 1);

    /// The four orthogonal unit vectors.
    pub const ORTHOGONAL: [Point; 4] = [Self::NORTH, Self::EAST, Self::SOUTH, Self::WEST];

    /// The four diagonal unit vectors.
    pub const DIAGONAL: [Point; 4] = [
        Self::NORTH_WEST,
        Self::NORTH_EAST,
        Self::SOUTH_WEST,
        Self::SOUTH_EAST,
    ];

    /// All eight unit vectors in row-major order.
    pub const ALL: [Point; 8] = [
        Self::NORTH_WEST,
        Self::NORTH,
        Self::NORTH_EAST,
        Self::WEST,
        Self::EAST,
        Self::SOUTH_WEST,
        Self::SOUTH,
        Self::SOUTH_EAST,
    ];

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8-neighbourhood of this point.
    pub fn neighbours(self) -> impl Iterator<Item = Point> {
        Self::ALL.into_iter().map(move |d| self + d)
    }

    /// The 4-neighbourhood of this point.
    pub fn orthogonal_neighbours(self) -> impl Iterator<Item = Point> {
        Self::ORTHOGONAL.into_iter().map(move |d| self + d)
    }

    pub fn manhattan(self, other: Point) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i64> for Point {
    type Output = Point;

    fn mul(self, rhs: i64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point::new(x, y)
    }
}

/// One of the four orthogonal compass directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit vector for this direction.
    pub const fn delta(self) -> Point {
        match self {
            Direction::North => Point::NORTH,
            Direction::East => Point::EAST,
            Direction::South => Point::SOUTH,
            Direction::West => Point::WEST,
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Counter-clockwise quarter turn.
    pub const fn turn_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::East => Direction::North,
            Direction::South => Direction::East,
            Direction::West => Direction::South,
        }
    }

    /// Clockwise quarter turn.
    pub const fn turn_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, rhs: Direction) -> Point {
        self + rhs.delta()
    }
}

impl AddAssign<Direction> for Point {
    fn add_assign(&mut self, rhs: Direction) {
        *self = *self + rhs;
    }
}
