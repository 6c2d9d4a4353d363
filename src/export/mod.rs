//! Export of batch results.
//!
//! Records are written only after the whole batch has finished, so a run that
//! fails before any lookup never leaves a partial file behind.

mod csv;
mod jsonl;

use anyhow::Result;
use std::path::Path;

use crate::config::ExportFormat;
use crate::record::Record;

pub use self::csv::{export_csv, write_csv};
pub use self::jsonl::{export_jsonl, write_jsonl};

/// Writes `records` to `path` in the requested format.
///
/// Returns the number of records written.
pub fn export_records(records: &[Record], path: &Path, format: ExportFormat) -> Result<usize> {
    match format {
        ExportFormat::Csv => export_csv(records, path),
        ExportFormat::Jsonl => export_jsonl(records, path),
    }
}
