//! CSV export functionality.
//!
//! One header row with the fixed column layout, then one row per record in
//! the order received. Fields are written verbatim; the `csv` crate applies
//! standard quoting for embedded delimiters, quotes and newlines.

use anyhow::{Context, Result};
use ::csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::config::RECORD_COLUMNS;
use crate::error_handling::RunError;
use crate::record::Record;

/// Writes `records` as CSV to any writer.
///
/// # Returns
///
/// The number of data rows written (the header is not counted).
pub fn write_csv<W: Write>(records: &[Record], output: W) -> Result<usize> {
    let mut writer = Writer::from_writer(output);

    writer
        .write_record(RECORD_COLUMNS)
        .context("Failed to write CSV header")?;

    for record in records {
        writer
            .write_record(record.to_row())
            .with_context(|| format!("Failed to write CSV row for {}", record.ip))?;
    }

    writer.flush().context("Failed to flush CSV output")?;

    Ok(records.len())
}

/// Exports records to a CSV file, replacing any existing file.
///
/// # Errors
///
/// Fails with `RunError::Output` when the file cannot be created, or with a
/// write error if a row cannot be written. Rows already written stay on disk.
pub fn export_csv(records: &[Record], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|source| RunError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(records, file)
}
