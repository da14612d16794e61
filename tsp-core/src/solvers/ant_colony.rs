#[cfg(test)]
#[path = "../../tests/unit/solvers/ant_colony_test.rs"]
mod ant_colony_test;

use super::construction::{construct_tour, nearest_index};
use super::*;
use crate::utils::ensure;

/// A simplified ant colony: there is no pheromone matrix, each ant builds a tour by moving to the
/// nearest unvisited point with `greedy_probability` or to a random one otherwise. The best tour
/// over all `iterations * ants` constructions is returned.
#[derive(Clone, Debug)]
pub struct AntColony {
    /// Amount of outer rounds.
    pub iterations: usize,
    /// Amount of ants per round.
    pub ants: usize,
    /// Probability to choose the nearest point instead of a random one.
    pub greedy_probability: f64,
}

impl Default for AntColony {
    fn default() -> Self {
        Self { iterations: 50, ants: 20, greedy_probability: 0.7 }
    }
}

impl AntColony {
    pub(crate) fn validate(&self) -> GenericResult<()> {
        ensure(self.iterations > 0 && self.ants > 0, || {
            format!("ant colony needs at least one ant and iteration, got {} and {}", self.ants, self.iterations)
        })?;
        ensure((0. ..=1.).contains(&self.greedy_probability), || {
            format!("ant colony greedy probability should be in [0, 1], got {}", self.greedy_probability)
        })
    }

    fn build_ant_tour(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour> {
        construct_tour(tour, random, |current, unvisited| {
            if random.is_hit(self.greedy_probability) {
                nearest_index(current, unvisited)
            } else {
                random.index(unvisited.len())
            }
        })
    }
}

impl Solver for AntColony {
    fn solve(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour> {
        self.validate()?;

        let mut best: Option<Tour> = None;

        for _ in 0..self.iterations {
            for _ in 0..self.ants {
                let candidate = self.build_ant_tour(tour, random)?;

                if best.as_ref().is_none_or(|best| candidate.distance() < best.distance()) {
                    best = Some(candidate);
                }
            }
        }

        best.ok_or_else(|| "ant colony has not built any tour".into())
    }
}
