//! Core crate contains building blocks to benchmark heuristics for the ***Travelling Salesman Problem***:
//!
//! - a tour model with cached distance and 2-opt move evaluation
//! - five heuristic solvers sharing one `Solver` capability
//! - a parallel trial harness which runs batches of independent randomized trials on bounded
//!   worker pools and derives duration, speedup and best distance metrics
//!
//! # Examples
//!
//! ```
//! use tsp_core::prelude::*;
//!
//! let points = vec![Point::new(0., 0.), Point::new(10., 0.), Point::new(10., 10.), Point::new(0., 10.)];
//! let config = BenchmarkConfig { trials: 2, worker_counts: vec![1, 2], ..BenchmarkConfig::default() };
//! let mut records = vec![];
//!
//! let best = run_dataset_sweep("square", points, &config, &Environment::default(), &mut |record| {
//!     records.push(record.clone())
//! })
//! .expect("cannot run benchmark");
//!
//! assert_eq!(records.len(), 10);
//! assert!(best.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod harness;
pub mod models;
pub mod prelude;
pub mod solvers;
pub mod utils;
