//! Scientific crate contains logic to read TSP datasets and to write benchmark results.
//!
//!
//! # Supported formats
//!
//! - **tsplib** subset of TSPLIB95 format: only a `NODE_COORD_SECTION` with euclidean coordinates
//! - **records** semicolon separated benchmark measurements, one row per configuration
//! - **summary** plain text description of the best route found for a dataset

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub(crate) mod helpers;

pub use tsp_core as core;

pub mod common;
pub mod tsplib;
