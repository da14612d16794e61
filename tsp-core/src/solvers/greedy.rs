#[cfg(test)]
#[path = "../../tests/unit/solvers/greedy_test.rs"]
mod greedy_test;

use super::construction::{construct_tour, nearest_index};
use super::*;

/// A nearest neighbour construction: starts from a random point and always moves to the closest
/// unvisited one. Randomness enters only via the start point, so running it many times gives a
/// multi-start greedy.
#[derive(Clone, Debug, Default)]
pub struct NearestNeighbour;

impl Solver for NearestNeighbour {
    fn solve(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour> {
        construct_tour(tour, random, nearest_index)
    }
}
