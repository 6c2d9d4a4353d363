//! HTTP client initialization.

use std::sync::Arc;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for provider lookups.
///
/// Only the User-Agent is configured. Timeouts are left at the transport
/// default and redirects are followed as `reqwest` does by default.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let client = ClientBuilder::new()
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
