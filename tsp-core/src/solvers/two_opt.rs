#[cfg(test)]
#[path = "../../tests/unit/solvers/two_opt_test.rs"]
mod two_opt_test;

use super::*;
use crate::utils::ensure;

/// Implements a classical TSP's two opt local search started from a random tour.
/// For algorithm details, see https://en.wikipedia.org/wiki/2-opt
#[derive(Clone, Debug)]
pub struct TwoOptSearch {
    /// Maximum amount of full passes over all edge pairs.
    pub max_passes: usize,
}

impl Default for TwoOptSearch {
    fn default() -> Self {
        Self { max_passes: 1000 }
    }
}

impl TwoOptSearch {
    /// Improves given tour in place using first-improvement strategy. Returns amount of passes made.
    /// Tour distance never increases.
    pub fn optimize(&self, tour: &mut Tour) -> usize {
        let size = tour.len();
        let mut passes = 0;
        let mut has_improvement = true;

        while has_improvement && passes < self.max_passes {
            has_improvement = false;
            passes += 1;

            for i in 0..size.saturating_sub(1) {
                for k in (i + 1)..size {
                    if tour.two_opt_delta(i, k) < 0. {
                        tour.apply_two_opt(i, k);
                        has_improvement = true;
                    }
                }
            }
        }

        passes
    }

    pub(crate) fn validate(&self) -> GenericResult<()> {
        ensure(self.max_passes > 0, || "2-opt max passes should be positive".to_string())
    }
}

impl Solver for TwoOptSearch {
    fn solve(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour> {
        ensure(!tour.is_empty(), || "cannot run 2-opt on empty tour".to_string())?;
        self.validate()?;

        let mut current = tour.clone();
        current.shuffle(random);
        self.optimize(&mut current);

        Ok(current)
    }
}
