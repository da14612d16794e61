#[cfg(test)]
#[path = "../../../tests/unit/extensions/bench/runner_test.rs"]
mod runner_test;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tsp_core::harness::{BenchmarkConfig, BestRoute, run_dataset_sweep};
use tsp_core::utils::{Environment, GenericError, GenericResult, get_cpus};
use tsp_scientific::common::RecordWriter;
use tsp_scientific::tsplib::{TsplibDataset, TsplibSummary, get_summary_file_name, list_tsplib_files};

/// Specifies where and how benchmark results are written.
pub struct BenchmarkOutput<'a, W: Write> {
    /// A writer of benchmark records.
    pub records: &'a mut RecordWriter<W>,
    /// A directory for best route summaries.
    pub summary_dir: &'a Path,
}

/// Keeps statistics of a finished benchmark run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BenchmarkStatistics {
    /// Amount of benchmarked datasets.
    pub datasets: usize,
    /// Amount of skipped datasets.
    pub skipped: usize,
    /// Amount of written records.
    pub records: usize,
    /// Amount of written summaries.
    pub summaries: usize,
}

/// Runs benchmark over every dataset found in given directory. Problems with a single dataset or
/// with persisting its results are reported to the logger and do not stop the run.
pub fn run_benchmark<W: Write>(
    directory: &Path,
    is_integral: bool,
    config: &BenchmarkConfig,
    output: BenchmarkOutput<'_, W>,
    environment: &Environment,
) -> GenericResult<BenchmarkStatistics> {
    config.validate()?;

    let files = list_tsplib_files(directory)?;
    let mut statistics = BenchmarkStatistics::default();

    if files.is_empty() {
        environment.log(format!("warning: no tsplib datasets found in '{}'", directory.display()).as_str());
        return Ok(statistics);
    }

    environment.log(format!("found {} datasets, available cpus: {}", files.len(), get_cpus()).as_str());

    for path in files.iter() {
        let dataset = path.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default();

        let points = match File::open(path)
            .map_err(GenericError::from)
            .and_then(|file| BufReader::new(file).read_tsplib(is_integral))
        {
            Ok(points) if !points.is_empty() => points,
            Ok(_) => {
                environment.log(format!("warning: dataset '{dataset}' has no coordinates, skipping").as_str());
                statistics.skipped += 1;
                continue;
            }
            Err(err) => {
                environment.log(format!("warning: cannot read dataset '{dataset}': '{err}', skipping").as_str());
                statistics.skipped += 1;
                continue;
            }
        };

        let best = run_dataset_sweep(dataset.as_str(), points, config, environment, &mut |record| {
            match output.records.write(record) {
                Ok(_) => statistics.records += 1,
                Err(err) => environment.log(format!("warning: {err}").as_str()),
            }
        })?;

        statistics.datasets += 1;

        if let Some(best) = best {
            match write_summary(dataset.as_str(), &best, output.summary_dir) {
                Ok(_) => statistics.summaries += 1,
                Err(err) => {
                    environment.log(format!("warning: cannot write summary for '{dataset}': '{err}'").as_str())
                }
            }
        }
    }

    Ok(statistics)
}

fn write_summary(dataset: &str, best: &BestRoute, summary_dir: &Path) -> GenericResult<()> {
    let file = File::create(summary_dir.join(get_summary_file_name(dataset)))?;

    (dataset, best).write_tsplib_summary(BufWriter::new(file))
}
