//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! failure categories tracked for batch statistics.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Why a geolocation lookup for one IP did not produce data.
///
/// The `Display` text is the failure reason reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The request never produced a usable response body.
    #[error("Request failed: {detail}")]
    Transport {
        /// Failure category
        kind: FailureKind,
        /// Transport error description
        detail: String,
    },

    /// The provider answered with an explicit `error` for this IP.
    #[error("{0}")]
    Provider(String),
}

impl LookupError {
    /// Returns the statistics category of this failure.
    pub fn kind(&self) -> FailureKind {
        match self {
            LookupError::Transport { kind, .. } => *kind,
            LookupError::Provider(_) => FailureKind::Provider,
        }
    }
}

/// Fatal errors that stop a run before or after the lookups.
#[derive(Error, Debug)]
pub enum RunError {
    /// Batch mode was requested without an output destination.
    #[error("Output file must be specified for batch processing")]
    MissingOutput,

    /// The batch input file is missing or unreadable.
    #[error("Failed to read input file {}: {source}", .path.display())]
    InputFile {
        /// Input path as given
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("Failed to write output file {}: {source}", .path.display())]
    Output {
        /// Output path as given
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Categories of per-IP lookup failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    /// Invalid request (e.g. an IP that does not form a valid URL)
    Request,
    /// Could not connect to the provider
    Connect,
    /// Transport timed out
    Timeout,
    /// Provider answered with a non-2xx status
    HttpStatus,
    /// Body was not the expected JSON document
    Decode,
    /// Any other transport failure
    Other,
    /// Provider reported an error inside a well-formed response
    Provider,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FailureKind {
    /// Label used in failure statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Request => "Invalid request",
            FailureKind::Connect => "Connection error",
            FailureKind::Timeout => "Timeout",
            FailureKind::HttpStatus => "HTTP status error",
            FailureKind::Decode => "Response decode error",
            FailureKind::Other => "Other transport error",
            FailureKind::Provider => "Provider error",
        }
    }
}
