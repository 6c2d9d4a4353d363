//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (provider endpoint, sentinels, column layout)
//! - Log level, log format and export format option types
//! - The library `Config` struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ExportFormat, LogFormat, LogLevel};
