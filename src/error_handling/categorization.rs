//! Error categorization.
//!
//! Maps `reqwest` errors to failure categories and renders them as
//! human-readable reasons.

use std::error::Error as StdError;

use super::types::{FailureKind, LookupError};

/// Categorizes a `reqwest::Error` into a `FailureKind`.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FailureKind {
    if error.is_status() {
        FailureKind::HttpStatus
    } else if error.is_builder() {
        FailureKind::Request
    } else if error.is_timeout() {
        FailureKind::Timeout
    } else if error.is_connect() {
        FailureKind::Connect
    } else if error.is_decode() {
        FailureKind::Decode
    } else {
        FailureKind::Other
    }
}

/// Formats an error together with its source chain, outermost first.
///
/// `reqwest` keeps the useful part of connection failures ("Connection refused",
/// "dns error") in the source chain, so the top-level message alone is too vague.
pub fn describe_error_chain(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

impl LookupError {
    /// Builds a transport failure from a `reqwest` error.
    ///
    /// When `redact_url` is set the request URL is dropped from the message so
    /// that API tokens carried in the query string never reach logs or output.
    pub fn from_reqwest(error: reqwest::Error, redact_url: bool) -> Self {
        let kind = categorize_reqwest_error(&error);
        let error = if redact_url { error.without_url() } else { error };
        LookupError::Transport {
            kind,
            detail: describe_error_chain(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("Connection refused")
        }
    }

    impl StdError for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("error sending request")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_describe_error_chain_includes_sources() {
        let message = describe_error_chain(&Outer(Inner));
        assert_eq!(message, "error sending request: Connection refused");
    }

    #[test]
    fn test_describe_error_chain_single_error() {
        assert_eq!(describe_error_chain(&Inner), "Connection refused");
    }

    #[test]
    fn test_categorize_builder_error() {
        let error = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("relative URL must not build");
        assert_eq!(categorize_reqwest_error(&error), FailureKind::Request);
    }

    #[test]
    fn test_from_reqwest_reason_prefix() {
        let error = reqwest::Client::new()
            .get("http://[::1")
            .build()
            .expect_err("malformed URL must not build");
        let lookup_error = LookupError::from_reqwest(error, false);
        assert_eq!(lookup_error.kind(), FailureKind::Request);
        assert!(lookup_error.to_string().starts_with("Request failed: "));
    }
}
