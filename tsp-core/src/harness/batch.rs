#[cfg(test)]
#[path = "../../tests/unit/harness/batch_test.rs"]
mod batch_test;

use super::*;
use crate::models::Tour;
use crate::solvers::{Algorithm, Solver};
use crate::utils::*;
use std::fmt;
use std::time::Duration;

/// Specifies a state of a trial batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchState {
    /// Batch is created, but no trials exist yet.
    Idle,
    /// Trials are created and the clock is started.
    Dispatching,
    /// All trials have finished, either with a tour or with a failure.
    AwaitingCompletion,
    /// Trial outcomes are being reduced.
    Aggregating,
    /// Batch is finished.
    Done,
}

impl fmt::Display for BatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A result of a batch run for one (algorithm, worker count) configuration.
pub struct BatchResult {
    /// An algorithm used by trials.
    pub algorithm: Algorithm,
    /// A worker pool size.
    pub workers: usize,
    /// Time from dispatch start till the last trial completion.
    pub duration: Duration,
    /// The shortest tour among successful trials.
    pub best: Option<Tour>,
    /// Amount of successful trials.
    pub completed: usize,
    /// Amount of failed trials.
    pub failed: usize,
}

/// A batch of independent trials which moves through
/// `Idle -> Dispatching -> AwaitingCompletion -> Aggregating -> Done` states.
pub struct TrialBatch<'a> {
    algorithm: Algorithm,
    workers: usize,
    base: &'a Tour,
    state: BatchState,
    trials: Vec<Trial<'a>>,
    outcomes: Vec<TrialOutcome>,
    timer: Option<Timer>,
    duration: Duration,
}

impl<'a> TrialBatch<'a> {
    /// Creates a new instance of `TrialBatch` in idle state.
    pub fn new(algorithm: Algorithm, workers: usize, base: &'a Tour) -> Self {
        Self {
            algorithm,
            workers,
            base,
            state: BatchState::Idle,
            trials: vec![],
            outcomes: vec![],
            timer: None,
            duration: Duration::default(),
        }
    }

    /// Returns current state.
    pub fn state(&self) -> BatchState {
        self.state
    }

    /// Creates trials with distinct seeds and starts the clock.
    pub fn dispatch(&mut self, size: usize, seeds: &mut SeedSequence) -> GenericResult<()> {
        self.transition(BatchState::Idle, BatchState::Dispatching)?;

        self.timer = Some(Timer::start());
        self.trials = seeds.next_batch(size).into_iter().map(|seed| Trial::new(self.algorithm, seed, self.base)).collect();

        Ok(())
    }

    /// Runs all dispatched trials on the pool and blocks until every one of them completes or fails.
    pub fn await_completion(&mut self, pool: &ThreadPool, solver: &dyn Solver) -> GenericResult<()> {
        self.transition(BatchState::Dispatching, BatchState::AwaitingCompletion)?;

        let trials = std::mem::take(&mut self.trials);
        self.outcomes = pool.execute(|| parallel_into_collect(trials, |trial| trial.run(solver)));
        self.duration = self.timer.as_ref().map(|timer| timer.elapsed()).unwrap_or_default();

        Ok(())
    }

    /// Reduces outcomes to the shortest tour. Failures are reported to the logger and skipped.
    pub fn aggregate(&mut self, environment: &Environment) -> GenericResult<BatchResult> {
        self.transition(BatchState::AwaitingCompletion, BatchState::Aggregating)?;

        let (tours, failures): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.outcomes).into_iter().partition(|outcome| outcome.result.is_ok());

        for outcome in failures.iter() {
            if let Err(err) = &outcome.result {
                environment.log(format!("{} trial with seed {} failed: {err}", self.algorithm, outcome.seed).as_str());
            }
        }

        let completed = tours.len();
        let best = tours
            .into_iter()
            .filter_map(|outcome| outcome.result.ok())
            .min_by(|a, b| compare_floats(a.distance(), b.distance()));

        self.transition(BatchState::Aggregating, BatchState::Done)?;

        Ok(BatchResult {
            algorithm: self.algorithm,
            workers: self.workers,
            duration: self.duration,
            best,
            completed,
            failed: failures.len(),
        })
    }

    fn transition(&mut self, expected: BatchState, next: BatchState) -> GenericResult<()> {
        if self.state != expected {
            return Err(format!("cannot move batch to {next} state from {}, expected {expected}", self.state).into());
        }

        self.state = next;

        Ok(())
    }
}

/// Runs a batch of `trials` independent trials on a pool of `workers` threads.
pub fn run_batch(
    algorithm: Algorithm,
    solver: &dyn Solver,
    base: &Tour,
    workers: usize,
    trials: usize,
    seeds: &mut SeedSequence,
    environment: &Environment,
) -> GenericResult<BatchResult> {
    let pool = ThreadPool::new(workers)?;
    let mut batch = TrialBatch::new(algorithm, pool.size(), base);

    batch.dispatch(trials, seeds)?;
    batch.await_completion(&pool, solver)?;
    batch.aggregate(environment)
}
