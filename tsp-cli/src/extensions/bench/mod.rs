//! Contains benchmark configuration and a driver.

pub mod config;

mod runner;
pub use self::runner::*;
