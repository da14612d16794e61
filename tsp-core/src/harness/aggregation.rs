#[cfg(test)]
#[path = "../../tests/unit/harness/aggregation_test.rs"]
mod aggregation_test;

use crate::models::{Distance, Tour};
use crate::solvers::Algorithm;
use std::time::Duration;

/// Keeps measurements of one (dataset, algorithm, worker count) configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRecord {
    /// A dataset name.
    pub dataset: String,
    /// An algorithm name.
    pub algorithm: String,
    /// A worker pool size.
    pub workers: usize,
    /// Batch duration.
    pub duration: Duration,
    /// Speedup relative to a single worker run.
    pub speedup: f64,
    /// The best distance found, absent when every trial failed.
    pub best_distance: Option<Distance>,
}

/// The best route found for a dataset.
#[derive(Clone, Debug)]
pub struct BestRoute {
    /// An algorithm which found the route.
    pub algorithm: Algorithm,
    /// A route itself.
    pub tour: Tour,
    /// A duration of the batch which found the route.
    pub duration: Duration,
}

/// Accumulates the best route across all algorithms and worker counts of a dataset.
#[derive(Default)]
pub struct GlobalBest {
    best: Option<BestRoute>,
}

impl GlobalBest {
    /// Offers a candidate route which replaces the current one only if it is strictly shorter.
    /// Returns true if the candidate was accepted.
    pub fn offer(&mut self, algorithm: Algorithm, tour: Tour, duration: Duration) -> bool {
        let is_better = self.distance().is_none_or(|best_distance| tour.distance() < best_distance);

        if is_better {
            self.best = Some(BestRoute { algorithm, tour, duration });
        }

        is_better
    }

    /// Returns the best distance seen so far.
    pub fn distance(&self) -> Option<Distance> {
        self.best.as_ref().map(|best| best.tour.distance())
    }

    /// Returns the best route.
    pub fn into_best(self) -> Option<BestRoute> {
        self.best
    }
}

/// Calculates speedup as a ratio of baseline duration to current one, zero for a non-positive duration.
pub fn speedup(baseline: Duration, duration: Duration) -> f64 {
    if duration.is_zero() { 0. } else { baseline.as_secs_f64() / duration.as_secs_f64() }
}

/// Returns sorted unique positive worker counts which always start from a single worker, so the
/// baseline duration is known before any other count is measured.
pub fn normalize_worker_counts(worker_counts: &[usize]) -> Vec<usize> {
    let mut counts = worker_counts.iter().copied().filter(|&count| count > 0).chain(std::iter::once(1)).collect::<Vec<_>>();
    counts.sort_unstable();
    counts.dedup();

    counts
}
