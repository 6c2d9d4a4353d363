//! JSONL export functionality.
//!
//! One JSON object per record per line, keyed by the CSV column names.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error_handling::RunError;
use crate::record::Record;

/// Writes `records` as JSON lines to any writer.
pub fn write_jsonl<W: Write>(records: &[Record], output: W) -> Result<usize> {
    let mut writer = BufWriter::new(output);

    for record in records {
        serde_json::to_writer(&mut writer, record)
            .with_context(|| format!("Failed to serialize record for {}", record.ip))?;
        writer.write_all(b"\n").context("Failed to write JSONL line")?;
    }

    writer.flush().context("Failed to flush JSONL output")?;

    Ok(records.len())
}

/// Exports records to a JSONL file, replacing any existing file.
pub fn export_jsonl(records: &[Record], path: &Path) -> Result<usize> {
    let file = File::create(path).map_err(|source| RunError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    write_jsonl(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_jsonl_uses_column_names() {
        let record = Record {
            ip: "8.8.8.8".to_string(),
            reverse_dns: "dns.google".to_string(),
            ..Default::default()
        };

        let mut out = Vec::new();
        assert_eq!(write_jsonl(&[record.clone()], &mut out).unwrap(), 1);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["IP"], "8.8.8.8");
        assert_eq!(value["Reverse DNS"], "dns.google");
        assert_eq!(value["ZIP"], "");

        let parsed: Record = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_write_jsonl_empty() {
        let mut out = Vec::new();
        assert_eq!(write_jsonl(&[], &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }
}
