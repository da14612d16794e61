#[cfg(test)]
#[path = "../../tests/unit/models/tour_test.rs"]
mod tour_test;

use super::{Distance, Point};
use crate::utils::{Random, shuffle};
use std::ops::Index;
use std::sync::OnceLock;

/// A tour is a sequence of points that visits each point exactly once and returns back to the
/// first one.
///
/// The total distance is cached: it is evaluated on first read and discarded by any mutation.
#[derive(Clone, Debug, Default)]
pub struct Tour {
    points: Vec<Point>,
    distance: OnceLock<Distance>,
}

impl Tour {
    /// Creates a new tour from a sequence of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, distance: OnceLock::new() }
    }

    /// Creates an empty tour with reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(Vec::with_capacity(capacity))
    }

    /// Returns amount of points in the tour.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the tour has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns a point at given position.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Returns points in visiting order.
    pub fn points(&self) -> &[Point] {
        self.points.as_slice()
    }

    /// Returns total cyclic distance including the edge from the last point back to the first.
    pub fn distance(&self) -> Distance {
        *self.distance.get_or_init(|| {
            self.points
                .iter()
                .zip(self.points.iter().cycle().skip(1))
                .map(|(from, to)| from.distance_to(to))
                .sum()
        })
    }

    /// Appends a point to the end of the tour.
    pub fn push(&mut self, point: Point) {
        self.invalidate();
        self.points.push(point);
    }

    /// Swaps two points.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.invalidate();
        self.points.swap(a, b);
    }

    /// Reverses points within inclusive index range. Does nothing if range is empty.
    pub fn reverse(&mut self, from: usize, to: usize) {
        if from >= to {
            return;
        }

        self.invalidate();
        self.points[from..=to].reverse();
    }

    /// Shuffles points using given random source.
    pub fn shuffle(&mut self, random: &dyn Random) {
        self.invalidate();
        shuffle(self.points.as_mut_slice(), random);
    }

    /// Returns a distance change of 2-opt move which replaces edges `(i, i + 1)` and `(k, k + 1)`
    /// with `(i, k)` and `(i + 1, k + 1)`. Indices wrap around the end of the tour.
    pub fn two_opt_delta(&self, i: usize, k: usize) -> Distance {
        let size = self.len();
        let (c1, c2) = (&self.points[i], &self.points[(i + 1) % size]);
        let (c3, c4) = (&self.points[k], &self.points[(k + 1) % size]);

        // NOTE sums are compared as a whole: degenerate moves must give exactly zero
        (c1.distance_to(c3) + c2.distance_to(c4)) - (c1.distance_to(c2) + c3.distance_to(c4))
    }

    /// Applies 2-opt move evaluated by `two_opt_delta`: the segment between the edges is reversed.
    pub fn apply_two_opt(&mut self, i: usize, k: usize) {
        self.reverse(i + 1, k);
    }

    /// Checks whether the tour contains exactly the same points as other one, in any order.
    pub fn is_permutation_of(&self, other: &Tour) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let sorted = |tour: &Tour| {
            let mut points = tour.points.clone();
            points.sort_by(|a, b| a.total_cmp(b));
            points
        };

        sorted(self) == sorted(other)
    }

    fn invalidate(&mut self) {
        self.distance.take();
    }
}

impl Index<usize> for Tour {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl FromIterator<Point> for Tour {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
