//! Contains common text reading and writing functionality.

mod record_writer;
pub use self::record_writer::RecordWriter;

mod text_reader;
pub(crate) use self::text_reader::*;
