#[cfg(test)]
#[path = "../../tests/unit/tsplib/reader_test.rs"]
mod reader_test;

use crate::common::*;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tsp_core::models::Point;
use tsp_core::utils::{GenericError, GenericResult};

const COORD_SECTION_TAG: &str = "NODE_COORD_SECTION";
const EOF_TAG: &str = "EOF";

/// A trait to read tsplib95 dataset coordinates. Please note that it is very basic implementation
/// of the format specification: only node coordinates are read, any other section is ignored.
pub trait TsplibDataset {
    /// Reads points of tsplib95 dataset. When `is_integral` is set, coordinates are truncated
    /// to integer values.
    fn read_tsplib(self, is_integral: bool) -> Result<Vec<Point>, GenericError>;
}

impl<R: Read> TsplibDataset for BufReader<R> {
    fn read_tsplib(self, is_integral: bool) -> Result<Vec<Point>, GenericError> {
        TsplibReader::new(self, is_integral).read_points()
    }
}

impl TsplibDataset for String {
    fn read_tsplib(self, is_integral: bool) -> Result<Vec<Point>, GenericError> {
        TsplibReader::new(BufReader::new(self.as_bytes()), is_integral).read_points()
    }
}

struct TsplibReader<R: Read> {
    buffer: String,
    reader: BufReader<R>,
    is_integral: bool,
}

impl<R: Read> TsplibReader<R> {
    fn new(reader: BufReader<R>, is_integral: bool) -> Self {
        Self { buffer: String::new(), reader, is_integral }
    }

    fn read_points(&mut self) -> Result<Vec<Point>, GenericError> {
        let mut points = vec![];
        let mut is_coord_section = false;

        while read_line(&mut self.reader, &mut self.buffer)? > 0 {
            let line = self.buffer.trim();

            if line.is_empty() {
                continue;
            }

            if line == EOF_TAG {
                break;
            }

            if !is_coord_section {
                is_coord_section = line.starts_with(COORD_SECTION_TAG);
                continue;
            }

            if let Some(point) = parse_point(line, self.is_integral) {
                points.push(point);
            }
        }

        Ok(points)
    }
}

/// Parses either labeled `id x y [..]` or unlabeled `x y` coordinate line.
fn parse_point(line: &str, is_integral: bool) -> Option<Point> {
    let data = line.split_whitespace().collect::<Vec<_>>();

    let (x, y) = match data.len() {
        0 | 1 => return None,
        2 => (data[0], data[1]),
        _ => (data[1], data[2]),
    };

    let (x, y) = (parse_real(x)?, parse_real(y)?);

    Some(if is_integral { Point::new(x.trunc(), y.trunc()) } else { Point::new(x, y) })
}

/// Lists files with `tsp` extension (in any case) from given directory sorted by name.
pub fn list_tsplib_files(directory: &Path) -> GenericResult<Vec<PathBuf>> {
    if !directory.is_dir() {
        return Err(format!("cannot find dataset directory: '{}'", directory.display()).into());
    }

    let mut files = std::fs::read_dir(directory)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|extension| extension.eq_ignore_ascii_case("tsp")))
        .collect::<Vec<_>>();

    files.sort();

    Ok(files)
}
