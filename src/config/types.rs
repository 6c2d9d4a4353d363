//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Batch output file format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Fixed-column CSV with a header row
    Csv,
    /// One JSON object per line
    Jsonl,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use ip_locator::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output: Some(PathBuf::from("results.csv")),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Geolocation provider base URL (without the trailing `/<ip>/json`)
    pub base_url: String,

    /// Optional provider API token, sent as the `token` query parameter
    pub token: Option<String>,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Batch output file; required in batch mode
    pub output: Option<PathBuf>,

    /// Batch output format
    pub format: ExportFormat,

    /// Number of IPs looked up at once (1 = sequential)
    pub max_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: None,
            format: ExportFormat::Csv,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_log_level_ordering() {
        let error = log::LevelFilter::from(LogLevel::Error);
        let warn = log::LevelFilter::from(LogLevel::Warn);
        let info = log::LevelFilter::from(LogLevel::Info);
        let debug = log::LevelFilter::from(LogLevel::Debug);
        let trace = log::LevelFilter::from(LogLevel::Trace);

        assert!(error < warn);
        assert!(warn < info);
        assert!(info < debug);
        assert!(debug < trace);
    }

    #[test]
    fn test_export_format_from_str() {
        assert_eq!(
            ExportFormat::from_str("csv", true).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_str("JSONL", true).unwrap(),
            ExportFormat::Jsonl
        );
        assert!(ExportFormat::from_str("parquet", true).is_err());
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "https://ipinfo.io");
        assert_eq!(config.max_concurrency, 1);
        assert_eq!(config.format, ExportFormat::Csv);
        assert!(config.output.is_none());
        assert!(config.token.is_none());
        assert!(config.user_agent.starts_with("ip_locator/"));
        assert!(matches!(config.log_level, LogLevel::Warn));
    }
}
