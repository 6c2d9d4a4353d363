//! Batch input file reading.

use std::path::Path;

use crate::error_handling::RunError;

/// Reads the batch input file: one IP address per line.
///
/// Lines are returned verbatim (line endings stripped) and in file order.
/// Trailing blank lines are dropped; blank lines in the middle are kept and
/// will surface as lookup failures.
///
/// # Errors
///
/// Returns `RunError::InputFile` if the file is missing, unreadable or not
/// valid UTF-8.
pub async fn read_ip_list(path: &Path) -> Result<Vec<String>, RunError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| RunError::InputFile {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(parse_ip_list(&contents))
}

/// Splits input text into IP lines (see [`read_ip_list`]).
pub fn parse_ip_list(contents: &str) -> Vec<String> {
    let mut ips: Vec<String> = contents.lines().map(str::to_string).collect();
    while ips.last().is_some_and(|line| line.trim().is_empty()) {
        ips.pop();
    }
    ips
}
