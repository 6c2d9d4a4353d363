//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{FailureKind, FailureStats};

/// Failure counts per category, skipping categories with no failures.
pub fn failure_breakdown(stats: &FailureStats) -> Vec<(FailureKind, usize)> {
    FailureKind::iter()
        .map(|kind| (kind, stats.get(kind)))
        .filter(|(_, count)| *count > 0)
        .collect()
}

/// Logs failure counts per category. Silent when nothing failed.
pub fn print_failure_statistics(stats: &FailureStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Failure Counts ({} total):", total);
    for (kind, count) in failure_breakdown(stats) {
        info!("   {}: {}", kind.as_str(), count);
    }
}

/// One-line summary of a batch run.
pub fn batch_summary(
    total: usize,
    successful: usize,
    failed: usize,
    elapsed_seconds: f64,
) -> String {
    format!(
        "Processed {} IP{} ({} succeeded, {} failed) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        successful,
        failed,
        elapsed_seconds
    )
}

/// Logs the batch summary line.
pub fn print_batch_summary(total: usize, successful: usize, failed: usize, elapsed_seconds: f64) {
    info!("{}", batch_summary(total, successful, failed, elapsed_seconds));
}
