use crate::utils::Timer;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A logger type which is called with various information regarding the work done by the benchmark.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences benchmark behavior.
#[derive(Clone)]
pub struct Environment {
    /// An information logger.
    pub logger: InfoLogger,
    /// A base seed used to derive trial seeds. When not set, a time based value is used.
    pub seed: Option<u64>,
    /// A timer started when environment is created.
    pub timer: Timer,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(logger: InfoLogger, seed: Option<u64>) -> Self {
        Self { logger, seed, timer: Timer::start() }
    }

    /// Creates an environment which writes log messages to the standard output.
    pub fn with_stdout_logger(seed: Option<u64>) -> Self {
        Self::new(Arc::new(|msg: &str| println!("{msg}")), seed)
    }

    /// Writes a message into the log prefixed with elapsed time.
    pub fn log(&self, msg: &str) {
        (self.logger)(format!("[{}s] {msg}", self.timer.elapsed_secs()).as_str())
    }

    /// Returns a base seed: either the configured one or derived from a clock.
    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now().duration_since(UNIX_EPOCH).map(|time| time.as_nanos() as u64).unwrap_or_default()
        })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(|_: &str| {}), None)
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}

