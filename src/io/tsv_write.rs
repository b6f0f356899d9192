use std::fs;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use crate::error::Result;

/// Writes a tab-delimited table to the given path: the header row first,
/// then one row per record with fields in the record's declaration order
/// (which must match `columns`). Creates missing parent directories before
/// writing. The header is written explicitly so an empty record set still
/// produces a complete table.
pub fn write_table<S: Serialize>(path: &Path, columns: &[&str], rows: &[S]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
