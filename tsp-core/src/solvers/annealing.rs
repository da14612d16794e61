#[cfg(test)]
#[path = "../../tests/unit/solvers/annealing_test.rs"]
mod annealing_test;

use super::*;
use crate::models::Distance;
use crate::utils::ensure;

/// A simulated annealing which explores random 2-opt moves and cools temperature geometrically
/// from `start_temperature` to `end_temperature` within `iterations`.
///
/// Returns the best tour seen during the whole run, not the final annealed state.
#[derive(Clone, Debug)]
pub struct SimulatedAnnealing {
    /// Total amount of proposed moves.
    pub iterations: usize,
    /// Initial temperature.
    pub start_temperature: f64,
    /// Temperature reached after the last iteration.
    pub end_temperature: f64,
}

impl Default for SimulatedAnnealing {
    fn default() -> Self {
        Self { iterations: 50_000, start_temperature: 100_000., end_temperature: 0.001 }
    }
}

impl SimulatedAnnealing {
    /// Returns a multiplier applied to temperature after every iteration.
    pub fn cooling_rate(&self) -> f64 {
        (self.end_temperature / self.start_temperature).powf(1. / self.iterations as f64)
    }

    pub(crate) fn validate(&self) -> GenericResult<()> {
        ensure(self.iterations > 0, || "annealing iterations should be positive".to_string())?;
        ensure(
            self.start_temperature.is_finite()
                && self.end_temperature > 0.
                && self.end_temperature <= self.start_temperature,
            || {
                format!(
                    "annealing temperatures should satisfy 0 < end <= start, got start={}, end={}",
                    self.start_temperature, self.end_temperature
                )
            },
        )
    }
}

impl Solver for SimulatedAnnealing {
    fn solve(&self, tour: &Tour, random: &dyn Random) -> GenericResult<Tour> {
        ensure(!tour.is_empty(), || "cannot run annealing on empty tour".to_string())?;
        self.validate()?;

        let mut current = tour.clone();
        current.shuffle(random);

        let size = current.len();
        if size < 3 {
            return Ok(current);
        }

        let mut best = current.clone();
        let mut current_distance = current.distance();
        let mut best_distance = current_distance;

        let cooling_rate = self.cooling_rate();
        let mut temperature = self.start_temperature;

        for _ in 0..self.iterations {
            let i = random.uniform_int(0, size as i32 - 2) as usize;
            let k = random.uniform_int(i as i32 + 1, size as i32 - 1) as usize;

            let delta = current.two_opt_delta(i, k);

            if is_accepted(delta, temperature, random) {
                current.apply_two_opt(i, k);
                current_distance += delta;

                if current_distance < best_distance {
                    best_distance = current_distance;
                    best = current.clone();
                }
            }

            temperature *= cooling_rate;
        }

        Ok(best)
    }
}

/// Metropolis acceptance criteria: improvements are always accepted, deteriorations with
/// probability `exp(-delta / temperature)` which vanishes to zero as temperature goes down.
fn is_accepted(delta: Distance, temperature: f64, random: &dyn Random) -> bool {
    if !delta.is_finite() {
        return false;
    }

    if delta < 0. {
        return true;
    }

    let probability = (-delta / temperature.max(f64::MIN_POSITIVE)).exp();

    probability > random.uniform_real(0., 1.)
}
