//! Benchmark configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../../../tests/unit/extensions/bench/config_test.rs"]
mod config_test;

extern crate serde_json;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::str::FromStr;
use tsp_core::harness::BenchmarkConfig;
use tsp_core::solvers::{Algorithm, SolverConfig};

/// A benchmark configuration.
#[derive(Clone, Default, Deserialize, Debug)]
pub struct Config {
    /// Specifies trial harness configuration.
    pub harness: Option<HarnessConfig>,
    /// Specifies algorithms to benchmark by their keys.
    pub algorithms: Option<Vec<String>>,
    /// Specifies solver parameters.
    pub solvers: Option<SolversConfig>,
}

/// A trial harness configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HarnessConfig {
    /// Amount of trials in every batch. Default is 16.
    pub trials: Option<usize>,
    /// Worker pool sizes. Default is [1, 2, 4, 6, 8, 12, 16].
    pub worker_counts: Option<Vec<usize>>,
    /// A base seed of trial seeds. Default is time based.
    pub seed: Option<u64>,
}

/// Solver parameters.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SolversConfig {
    pub two_opt: Option<TwoOptConfig>,
    pub annealing: Option<AnnealingConfig>,
    pub genetic: Option<GeneticConfig>,
    pub ant_colony: Option<AntColonyConfig>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TwoOptConfig {
    /// Maximum amount of passes. Default is 1000.
    pub max_passes: Option<usize>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AnnealingConfig {
    /// Default is 50000.
    pub iterations: Option<usize>,
    /// Default is 100000.
    pub start_temperature: Option<f64>,
    /// Default is 0.001.
    pub end_temperature: Option<f64>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeneticConfig {
    /// Default is 50.
    pub population_size: Option<usize>,
    /// Default is 500.
    pub generations: Option<usize>,
    /// Default is 4.
    pub tournament_size: Option<usize>,
    /// Default is 0.15.
    pub swap_rate: Option<f64>,
    /// Default is 0.1.
    pub reversal_rate: Option<f64>,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AntColonyConfig {
    /// Default is 50.
    pub iterations: Option<usize>,
    /// Default is 20.
    pub ants: Option<usize>,
    /// Default is 0.7.
    pub greedy_probability: Option<f64>,
}

impl Config {
    /// Returns a base seed if it is specified.
    pub fn seed(&self) -> Option<u64> {
        self.harness.as_ref().and_then(|harness| harness.seed)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates a validated benchmark config. Missing values are taken from defaults.
pub fn create_benchmark_config(config: &Config) -> Result<BenchmarkConfig, String> {
    let mut benchmark = BenchmarkConfig::default();

    if let Some(harness) = &config.harness {
        benchmark.trials = harness.trials.unwrap_or(benchmark.trials);
        benchmark.worker_counts = harness.worker_counts.clone().unwrap_or(benchmark.worker_counts);
    }

    if let Some(algorithms) = &config.algorithms {
        benchmark.algorithms = parse_algorithms(algorithms.iter().map(|key| key.as_str()))?;
    }

    if let Some(solvers) = &config.solvers {
        configure_solvers(&mut benchmark.solvers, solvers);
    }

    benchmark.validate().map_err(|err| format!("invalid benchmark config: '{err}'"))?;

    Ok(benchmark)
}

/// Parses algorithms from their keys keeping given order.
pub fn parse_algorithms<'a>(keys: impl Iterator<Item = &'a str>) -> Result<Vec<Algorithm>, String> {
    keys.map(Algorithm::from_str).collect()
}

fn configure_solvers(solvers: &mut SolverConfig, config: &SolversConfig) {
    if let Some(two_opt) = &config.two_opt {
        solvers.two_opt.max_passes = two_opt.max_passes.unwrap_or(solvers.two_opt.max_passes);
    }

    if let Some(annealing) = &config.annealing {
        let defaults = &mut solvers.annealing;
        defaults.iterations = annealing.iterations.unwrap_or(defaults.iterations);
        defaults.start_temperature = annealing.start_temperature.unwrap_or(defaults.start_temperature);
        defaults.end_temperature = annealing.end_temperature.unwrap_or(defaults.end_temperature);
    }

    if let Some(genetic) = &config.genetic {
        let defaults = &mut solvers.genetic;
        defaults.population_size = genetic.population_size.unwrap_or(defaults.population_size);
        defaults.generations = genetic.generations.unwrap_or(defaults.generations);
        defaults.tournament_size = genetic.tournament_size.unwrap_or(defaults.tournament_size);
        defaults.swap_rate = genetic.swap_rate.unwrap_or(defaults.swap_rate);
        defaults.reversal_rate = genetic.reversal_rate.unwrap_or(defaults.reversal_rate);
    }

    if let Some(ant_colony) = &config.ant_colony {
        let defaults = &mut solvers.ant_colony;
        defaults.iterations = ant_colony.iterations.unwrap_or(defaults.iterations);
        defaults.ants = ant_colony.ants.unwrap_or(defaults.ants);
        defaults.greedy_probability = ant_colony.greedy_probability.unwrap_or(defaults.greedy_probability);
    }
}
