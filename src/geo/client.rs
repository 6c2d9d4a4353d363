//! Remote geolocation client.
//!
//! One GET per IP against `<base_url>/<ip>/json`. Transport failures and
//! provider-reported errors are both folded into `LookupError`; there are no
//! retries.

use std::future::Future;
use std::sync::Arc;

use serde_json::Value;

use super::types::{GeoInfo, GeoResult};
use crate::config::GENERIC_PROVIDER_ERROR;
use crate::error_handling::{FailureKind, LookupError};

/// Something that can geolocate an IP address.
///
/// Implemented by [`GeoClient`]; the batch pipeline is generic over it so it
/// can be driven by in-memory fakes.
pub trait GeoLookup {
    /// Looks up one IP. Never panics; every failure is a `LookupError`.
    fn lookup(&self, ip: &str) -> impl Future<Output = GeoResult> + Send;
}

/// HTTP client for an ipinfo-style geolocation provider.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Arc<reqwest::Client>,
    base_url: String,
    token: Option<String>,
}

impl GeoClient {
    /// Creates a client for the provider at `base_url`, without a token.
    pub fn new(client: Arc<reqwest::Client>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Sets the API token sent as the `token` query parameter.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// URL queried for `ip`. The IP is inserted verbatim.
    pub fn endpoint(&self, ip: &str) -> String {
        format!("{}/{}/json", self.base_url.trim_end_matches('/'), ip)
    }

    /// Looks up one IP address.
    ///
    /// # Errors
    ///
    /// - `LookupError::Transport` when the request fails, the status is not
    ///   2xx, or the body is not a JSON object
    /// - `LookupError::Provider` when the body carries an `error` field
    pub async fn lookup(&self, ip: &str) -> GeoResult {
        let url = self.endpoint(ip);
        log::debug!("Querying geolocation provider for {ip}");

        let redact = self.token.is_some();
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token)]);
        }

        let response = request
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| LookupError::from_reqwest(e, redact))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| LookupError::from_reqwest(e, redact))?;

        parse_response(body)
    }
}

impl GeoLookup for GeoClient {
    fn lookup(&self, ip: &str) -> impl Future<Output = GeoResult> + Send {
        GeoClient::lookup(self, ip)
    }
}

/// Decodes a provider response body.
///
/// A present `error` field wins over any data fields.
pub fn parse_response(body: Value) -> GeoResult {
    let Value::Object(fields) = &body else {
        return Err(decode_error("expected a JSON object"));
    };
    if let Some(error) = fields.get("error") {
        return Err(LookupError::Provider(provider_message(error)));
    }

    serde_json::from_value::<GeoInfo>(body).map_err(|e| decode_error(&e.to_string()))
}

fn decode_error(detail: &str) -> LookupError {
    LookupError::Transport {
        kind: FailureKind::Decode,
        detail: format!("unexpected response body: {detail}"),
    }
}

/// Extracts the message of a provider `error` value.
///
/// `error.info` is preferred; `message` and `title` are fallbacks for providers
/// that use those keys. A bare string is used as-is.
fn provider_message(error: &Value) -> String {
    match error {
        Value::String(message) if !message.is_empty() => message.clone(),
        Value::Object(fields) => ["info", "message", "title"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .filter(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_PROVIDER_ERROR.to_string()),
        _ => GENERIC_PROVIDER_ERROR.to_string(),
    }
}
