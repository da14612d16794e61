//! This module reimports commonly used types.

pub use crate::harness::{BenchmarkConfig, BenchmarkRecord, BestRoute, run_dataset_sweep};
pub use crate::models::{Distance, Point, Tour};
pub use crate::solvers::{Algorithm, Solver, SolverConfig};
pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Random};
