//! Main application modules.
//!
//! This module provides input file reading, progress logging and statistics
//! printing used by the run entry points.

pub mod input;
pub mod logging;
pub mod statistics;

// Re-export public API
pub use input::{parse_ip_list, read_ip_list};
pub use logging::log_progress;
pub use statistics::{
    batch_summary, failure_breakdown, print_batch_summary, print_failure_statistics,
};
