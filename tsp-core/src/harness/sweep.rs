#[cfg(test)]
#[path = "../../tests/unit/harness/sweep_test.rs"]
mod sweep_test;

use super::*;
use crate::models::{Point, Tour};
use crate::solvers::{Algorithm, SolverConfig};
use crate::utils::*;

/// Specifies benchmark configuration.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Amount of trials in every batch.
    pub trials: usize,
    /// Worker pool sizes to sweep over.
    pub worker_counts: Vec<usize>,
    /// Algorithms to benchmark, in order.
    pub algorithms: Vec<Algorithm>,
    /// Solver parameters.
    pub solvers: SolverConfig,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { trials: 16, worker_counts: vec![1, 2, 4, 6, 8, 12, 16], algorithms: Algorithm::all(), solvers: Default::default() }
    }
}

impl BenchmarkConfig {
    /// Validates configuration returning all found issues joined into one error.
    pub fn validate(&self) -> GenericResult<()> {
        let mut errors = self.solvers.validate();

        if self.trials == 0 {
            errors.push("amount of trials should be positive".into());
        }

        if self.algorithms.is_empty() {
            errors.push("at least one algorithm should be specified".into());
        }

        if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(errors.as_slice(), "\n").into()) }
    }
}

/// Runs all configured algorithms over all worker counts for one dataset. Every record is passed to
/// `on_record` as soon as its configuration is finished. Returns the best route found, if any trial
/// succeeded.
pub fn run_dataset_sweep(
    dataset: &str,
    points: Vec<Point>,
    config: &BenchmarkConfig,
    environment: &Environment,
    on_record: &mut dyn FnMut(&BenchmarkRecord),
) -> GenericResult<Option<BestRoute>> {
    ensure(!points.is_empty(), || format!("dataset '{dataset}' has no points"))?;
    config.validate()?;

    let base = Tour::new(points);
    let mut seeds = SeedSequence::new(environment.base_seed());
    let mut global_best = GlobalBest::default();
    let worker_counts = normalize_worker_counts(config.worker_counts.as_slice());

    environment.log(format!("dataset '{dataset}': {} points, worker counts {worker_counts:?}", base.len()).as_str());

    for &algorithm in config.algorithms.iter() {
        environment.log(format!("algorithm: {algorithm}").as_str());

        let solver = algorithm.create_solver(&config.solvers);
        let mut baseline = None;

        for &workers in worker_counts.iter() {
            let result =
                run_batch(algorithm, solver.as_ref(), &base, workers, config.trials, &mut seeds, environment)?;

            if workers == 1 {
                baseline = Some(result.duration);
            }

            let record = BenchmarkRecord {
                dataset: dataset.to_string(),
                algorithm: algorithm.name().to_string(),
                workers,
                duration: result.duration,
                speedup: baseline.map_or(0., |baseline| speedup(baseline, result.duration)),
                best_distance: result.best.as_ref().map(|tour| tour.distance()),
            };

            environment.log(
                format!(
                    "workers: {workers} | duration: {:.0} ms | speedup: {:.2} | distance: {} | failed: {}",
                    as_millis_float(record.duration),
                    record.speedup,
                    record.best_distance.map_or("n/a".to_string(), |distance| format!("{distance:.0}")),
                    result.failed
                )
                .as_str(),
            );

            on_record(&record);

            if let Some(best) = result.best {
                if global_best.offer(algorithm, best, result.duration) {
                    environment.log(format!("new best route for '{dataset}' found by {algorithm}").as_str());
                }
            }
        }
    }

    Ok(global_best.into_best())
}
