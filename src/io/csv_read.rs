use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Result, ToolError};
use crate::model::InputRow;

/// Reads the comma-delimited spreadsheet export into row records, in file
/// order. Each record maps the header labels to the corresponding cell
/// values; rows shorter than the header simply omit the trailing cells.
/// Performs no interpretation of values beyond the delimiter structure.
pub fn read_rows(path: &Path) -> Result<Vec<InputRow>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    if headers.iter().all(|label| label.trim().is_empty()) {
        return Err(ToolError::MalformedTable(
            "missing header row".to_string(),
        ));
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: InputRow = headers
            .iter()
            .map(str::to_string)
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}
