#[cfg(test)]
#[path = "../../tests/unit/tsplib/writer_test.rs"]
mod writer_test;

use std::io::{BufWriter, Write};
use tsp_core::harness::BestRoute;
use tsp_core::utils::{GenericResult, as_millis_float};

/// A trait to write the best route summary of a dataset.
pub trait TsplibSummary<W: Write> {
    /// Writes the best route summary.
    fn write_tsplib_summary(&self, writer: BufWriter<W>) -> GenericResult<()>;
}

impl<W: Write> TsplibSummary<W> for (&str, &BestRoute) {
    fn write_tsplib_summary(&self, writer: BufWriter<W>) -> GenericResult<()> {
        let (dataset, best) = *self;
        let mut writer = writer;

        writeln!(writer, "Dataset: {dataset}")?;
        writeln!(writer, "Algorithm: {}", best.algorithm.name())?;
        writeln!(writer, "Total Distance: {:.2}", best.tour.distance())?;
        writeln!(writer, "Duration(ms): {:.2}", as_millis_float(best.duration))?;
        writeln!(writer, "Route:")?;

        best.tour.points().iter().try_for_each(|point| writeln!(writer, "{} {}", point.x(), point.y()))?;

        writer.flush()?;

        Ok(())
    }
}

/// Returns a summary file name for given dataset.
pub fn get_summary_file_name(dataset: &str) -> String {
    format!("solution_{dataset}.txt")
}
