//! Geolocation data structures.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error_handling::LookupError;

/// Outcome of one geolocation lookup.
pub type GeoResult = Result<GeoInfo, LookupError>;

/// Fields recognized in a provider response.
///
/// Every field is optional: the provider omits fields it has no data for (and
/// returns almost nothing for reserved ranges). Strings are kept verbatim.
/// Numbers and booleans in a recognized slot are stringified; objects, arrays
/// and `null` decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoInfo {
    /// Address the provider answered for
    #[serde(default, deserialize_with = "lenient_string")]
    pub ip: Option<String>,
    /// Two-letter country code
    #[serde(default, deserialize_with = "lenient_string")]
    pub country: Option<String>,
    /// Region or state name
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    /// City name
    #[serde(default, deserialize_with = "lenient_string")]
    pub city: Option<String>,
    /// Postal code
    #[serde(default, deserialize_with = "lenient_string")]
    pub postal: Option<String>,
    /// Comma-joined `"<latitude>,<longitude>"`
    #[serde(default, deserialize_with = "lenient_string")]
    pub loc: Option<String>,
    /// Organization, usually prefixed with the AS number (`"AS15169 Google LLC"`)
    #[serde(default, deserialize_with = "lenient_string")]
    pub org: Option<String>,
    /// Autonomous system, when the provider reports it separately
    #[serde(default, rename = "as", deserialize_with = "lenient_string")]
    pub as_number: Option<String>,
    /// IANA timezone name
    #[serde(default, deserialize_with = "lenient_string")]
    pub timezone: Option<String>,
    /// Local currency code
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
