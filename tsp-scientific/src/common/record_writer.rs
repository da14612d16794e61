#[cfg(test)]
#[path = "../../tests/unit/common/record_writer_test.rs"]
mod record_writer_test;

use csv::{Writer, WriterBuilder};
use std::io::Write;
use tsp_core::harness::BenchmarkRecord;
use tsp_core::utils::{GenericResult, as_millis_float};

const HEADER: [&str; 6] = ["Dataset", "Algorithm", "ThreadCount", "Duration(ms)", "Speedup", "BestDistance"];

/// Writes benchmark records as semicolon separated rows. Every row is flushed immediately, so an
/// interrupted run keeps all finished measurements.
pub struct RecordWriter<W: Write> {
    writer: Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    /// Creates a new instance of `RecordWriter` and writes the header line.
    pub fn new(writer: W) -> GenericResult<Self> {
        let mut writer = WriterBuilder::new().delimiter(b';').has_headers(false).from_writer(writer);

        writer.write_record(HEADER).map_err(|err| format!("cannot write records header: '{err}'"))?;
        writer.flush()?;

        Ok(Self { writer })
    }

    /// Writes a single record. An absent best distance is written as an empty field.
    pub fn write(&mut self, record: &BenchmarkRecord) -> GenericResult<()> {
        self.writer
            .write_record([
                record.dataset.clone(),
                record.algorithm.clone(),
                record.workers.to_string(),
                format!("{:.2}", as_millis_float(record.duration)),
                format!("{:.2}", record.speedup),
                record.best_distance.map(|distance| format!("{distance:.2}")).unwrap_or_default(),
            ])
            .map_err(|err| format!("cannot write record for '{}': '{err}'", record.dataset))?;

        self.writer.flush().map_err(From::from)
    }
}
