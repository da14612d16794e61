#[cfg(test)]
#[path = "../../tests/unit/harness/trial_test.rs"]
mod trial_test;

use crate::models::Tour;
use crate::solvers::{Algorithm, Solver};
use crate::utils::{DefaultRandom, GenericError, GenericResult};
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// A single randomized solver run over a shared base tour.
pub struct Trial<'a> {
    /// An algorithm to run.
    pub algorithm: Algorithm,
    /// A seed of trial's private random source.
    pub seed: u64,
    base: &'a Tour,
}

/// A result of trial execution.
pub struct TrialOutcome {
    /// A seed used by the trial.
    pub seed: u64,
    /// A produced tour or a reason of failure.
    pub result: GenericResult<Tour>,
}

impl<'a> Trial<'a> {
    /// Creates a new instance of `Trial`.
    pub fn new(algorithm: Algorithm, seed: u64, base: &'a Tour) -> Self {
        Self { algorithm, seed, base }
    }

    /// Runs the trial with given solver. A solver's error or panic is turned into a failed
    /// outcome, as well as a result which is not a permutation of the base tour.
    pub fn run(self, solver: &dyn Solver) -> TrialOutcome {
        let random = DefaultRandom::new_with_seed(self.seed);
        let start = self.base.clone();

        let result = catch_unwind(AssertUnwindSafe(|| solver.solve(&start, &random)))
            .map_err(|payload| GenericError::from(format!("trial panicked: '{}'", get_panic_message(payload.as_ref()))))
            .and_then(|result| result)
            .and_then(|tour| {
                if tour.is_permutation_of(self.base) {
                    Ok(tour)
                } else {
                    Err(format!("{} returned invalid tour of size {}", self.algorithm, tour.len()).into())
                }
            });

        TrialOutcome { seed: self.seed, result }
    }
}

fn get_panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown reason".to_string())
}
