//! Grid cell coordinates used by the curve tables.

use std::ops::{Add, Sub};

/// A 2D grid cell, used purely as a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Horizontal position, `[0, width)` for cells of a constructed curve.
    pub x: i64,
    /// Vertical position, `[0, width)` for cells of a constructed curve.
    pub y: i64,
}

impl Coord {
    /// Create a coordinate from its components.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another cell.
    ///
    /// Adjacent cells of a Hilbert curve are always at distance exactly 1.
    pub const fn manhattan(self, other: Self) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add for Coord {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (i64, i64) {
    fn from(c: Coord) -> Self {
        (c.x, c.y)
    }
}
