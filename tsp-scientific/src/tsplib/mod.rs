//! Contains functionality to read TSP datasets from a subset of TSPLIB95 format and to write
//! best route summaries.

mod reader;
pub use self::reader::{TsplibDataset, list_tsplib_files};

mod writer;
pub use self::writer::{TsplibSummary, get_summary_file_name};
