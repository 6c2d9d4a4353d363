//! Error handling and failure statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, lookup and run errors)
//! - Categorization of transport errors
//! - Failure statistics tracking for batch runs
//!
//! Per-IP lookup failures are never fatal in batch mode; they are counted by
//! `FailureKind` and reported at the end of the run.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, describe_error_chain};
pub use stats::FailureStats;
pub use types::{FailureKind, InitializationError, LookupError, RunError};
