#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use crate::utils::GenericResult;
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a bounded thread pool wrapper: at most `num_threads` operations run at once,
/// the rest are queued until a worker is free.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        if num_threads == 0 {
            return Err("thread pool size should be positive".into());
        }

        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|idx| format!("trial-worker-{idx}"))
            .build()
            .map(|inner| Self { inner })
            .map_err(|err| format!("cannot build a thread pool of size {num_threads}: '{err}'").into())
    }

    /// Returns amount of threads in the pool.
    pub fn size(&self) -> usize {
        self.inner.current_num_threads()
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Maps collection and collects results into vector in parallel. Every item is scheduled
/// separately, so a pool runs as many of them at once as it has threads.
pub fn parallel_into_collect<T, F, R>(source: Vec<T>, map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(T) -> R + Sync + Send,
    R: Send,
{
    source.into_par_iter().with_max_len(1).map(map_op).collect()
}
