//! Contains command line extensions.

pub mod bench;
