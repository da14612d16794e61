//! A library part of the command line interface: benchmark configuration and a driver which runs
//! the benchmark over a directory of datasets.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use tsp_core as core;
pub use tsp_scientific as scientific;

pub mod extensions;
