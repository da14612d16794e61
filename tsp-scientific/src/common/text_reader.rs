use std::io::prelude::*;
use std::io::{BufReader, Read};
use tsp_core::utils::GenericError;

/// Reads one line into the buffer. Returns zero at the end of input.
pub(crate) fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}

/// Parses a real value from a text field, skipping non-finite ones.
pub(crate) fn parse_real(data: &str) -> Option<f64> {
    data.parse::<f64>().ok().filter(|value| value.is_finite())
}
