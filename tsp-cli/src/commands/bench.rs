#[cfg(test)]
#[path = "../../tests/unit/commands/bench_test.rs"]
mod bench_test;

use super::*;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;
use tsp_cli::core::harness::BenchmarkConfig;
use tsp_cli::core::utils::Environment;
use tsp_cli::extensions::bench::config::{Config, create_benchmark_config, parse_algorithms, read_config};
use tsp_cli::extensions::bench::{BenchmarkOutput, run_benchmark};
use tsp_cli::scientific::common::RecordWriter;

const DATASETS_ARG_NAME: &str = "DATASETS";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const SUMMARY_DIR_ARG_NAME: &str = "summary-dir";
const CONFIG_ARG_NAME: &str = "config";
const WORKERS_ARG_NAME: &str = "workers";
const TRIALS_ARG_NAME: &str = "trials";
const ALGORITHMS_ARG_NAME: &str = "algorithms";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const INTEGRAL_ARG_NAME: &str = "integral";
const LOG_ARG_NAME: &str = "log";

pub fn get_bench_app() -> Command {
    Command::new("tsp-bench")
        .about("Benchmarks heuristics for the Travelling Salesman Problem over a directory of datasets")
        .arg(Arg::new(DATASETS_ARG_NAME).help("Sets the directory with datasets in tsplib format").required(true).index(1))
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for benchmark records")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false)
                .default_value("tsp_results.txt"),
        )
        .arg(
            Arg::new(SUMMARY_DIR_ARG_NAME)
                .help("Specifies path to the directory for best route summaries")
                .short('s')
                .long(SUMMARY_DIR_ARG_NAME)
                .required(false)
                .default_value("."),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the benchmark configuration file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(WORKERS_ARG_NAME)
                .help("Specifies comma separated worker counts, for example: \"1,2,4\"")
                .short('w')
                .long(WORKERS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TRIALS_ARG_NAME)
                .help("Specifies amount of trials for every algorithm and worker count")
                .short('n')
                .long(TRIALS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(ALGORITHMS_ARG_NAME)
                .help("Specifies comma separated algorithms: greedy, two-opt, annealing, genetic, ant-colony")
                .short('a')
                .long(ALGORITHMS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies a base seed of trials to make the run reproducible")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(INTEGRAL_ARG_NAME)
                .help("Truncates dataset coordinates to integer values")
                .long(INTEGRAL_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(Arg::new(LOG_ARG_NAME).help("Specifies whether benchmark progress should be logged").long(LOG_ARG_NAME).action(ArgAction::SetTrue))
}

pub fn run_bench(matches: &ArgMatches) -> Result<(), String> {
    let datasets = matches.get_one::<String>(DATASETS_ARG_NAME).ok_or("datasets directory is not specified")?;
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config"))))
        .unwrap_or_else(|| Ok(Config::default()))?;

    let benchmark_config = get_benchmark_config(matches, &config)?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?.or(config.seed());
    let environment = if matches.get_flag(LOG_ARG_NAME) {
        Environment::with_stdout_logger(seed)
    } else {
        Environment::new(Arc::new(|_: &str| {}), seed)
    };

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map_or("tsp_results.txt", |path| path.as_str());
    let summary_dir = matches.get_one::<String>(SUMMARY_DIR_ARG_NAME).map_or(".", |path| path.as_str());
    let mut records = RecordWriter::new(create_file(out_result, "out result")).map_err(|err| err.to_string())?;

    let output = BenchmarkOutput { records: &mut records, summary_dir: Path::new(summary_dir) };

    run_benchmark(Path::new(datasets), matches.get_flag(INTEGRAL_ARG_NAME), &benchmark_config, output, &environment)
        .map(|statistics| {
            environment.log(
                format!(
                    "benchmark is finished: {} datasets, {} skipped, {} records, {} summaries",
                    statistics.datasets, statistics.skipped, statistics.records, statistics.summaries
                )
                .as_str(),
            )
        })
        .map_err(|err| format!("cannot run benchmark: '{err}'"))
}

fn get_benchmark_config(matches: &ArgMatches, config: &Config) -> Result<BenchmarkConfig, String> {
    let mut benchmark_config = create_benchmark_config(config)?;

    if let Some(trials) = parse_int_value::<usize>(matches, TRIALS_ARG_NAME, "trials")? {
        benchmark_config.trials = trials;
    }

    if let Some(worker_counts) = parse_int_list_value::<usize>(matches, WORKERS_ARG_NAME, "workers")? {
        benchmark_config.worker_counts = worker_counts;
    }

    if let Some(algorithms) = matches.get_one::<String>(ALGORITHMS_ARG_NAME) {
        benchmark_config.algorithms = parse_algorithms(algorithms.split(','))?;
    }

    benchmark_config.validate().map_err(|err| format!("invalid benchmark config: '{err}'"))?;

    Ok(benchmark_config)
}
