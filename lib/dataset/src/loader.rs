//! CSV ingestion
//!
//! Reads a delimited dataset whose header row defines column names and
//! yields one field-map per data row. The corpus is rebuilt from the source
//! file on every process start; nothing derived is persisted.

use csv::ReaderBuilder;
use schoolx_core::{Error, FieldMap, Result};
use std::path::Path;
use tracing::debug;

/// Load a CSV file into raw field-map rows.
///
/// The first row is taken as the header; every following row becomes a map
/// from column name to cell value. An unparseable row (wrong field count,
/// bad quoting) fails the whole load - malformed files are surfaced, not
/// papered over.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<FieldMap>> {
    let path = path.as_ref();
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| Error::Dataset(format!("failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| Error::Dataset(format!("failed to read header row: {}", e)))?
        .clone();

    let mut rows = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| Error::Dataset(format!("failed to parse row {}: {}", row_idx + 1, e)))?;
        let row: FieldMap = headers
            .iter()
            .zip(record.iter())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    debug!(rows = rows.len(), path = %path.display(), "loaded dataset");
    Ok(rows)
}
