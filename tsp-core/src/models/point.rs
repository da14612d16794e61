#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use super::Distance;
use std::cmp::Ordering;
use std::fmt;

/// Represents a city as an immutable point on a plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns x coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns y coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> Distance {
        let dx = self.x - other.x;
        let dy = self.y - other.y;

        (dx * dx + dy * dy).sqrt()
    }

    /// Provides a total order over points (lexicographic by x, then y) which is used to compare
    /// point sets regardless of their visiting order.
    pub fn total_cmp(&self, other: &Point) -> Ordering {
        self.x.total_cmp(&other.x).then_with(|| self.y.total_cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
