//! Adapters for reading and writing delimited tables.

pub mod csv_read;
pub mod tsv_write;
