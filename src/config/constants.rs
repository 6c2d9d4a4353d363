//! Configuration constants.
//!
//! This module defines the constants used throughout the application: the
//! provider endpoint, sentinel values and the fixed export column layout.

/// Default geolocation provider. Lookups go to `<base>/<ip>/json`.
pub const DEFAULT_BASE_URL: &str = "https://ipinfo.io";

/// Environment variable holding an optional provider API token.
pub const TOKEN_ENV_VAR: &str = "IPINFO_TOKEN";

/// Default User-Agent string for provider requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ip_locator/", env!("CARGO_PKG_VERSION"));

/// Number of IPs looked up at once. `1` keeps lookups strictly sequential.
pub const DEFAULT_MAX_CONCURRENCY: usize = 1;

/// Log batch progress every N processed IPs.
pub const LOGGING_INTERVAL: usize = 25;

/// Reverse DNS placeholder when no hostname could be resolved.
pub const UNKNOWN_HOSTNAME: &str = "Unknown";

/// Report placeholder for fields the provider did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// Provider error text used when the `error` object carries no message.
pub const GENERIC_PROVIDER_ERROR: &str = "Provider reported an error";

/// Column order shared by the CSV header, the JSONL keys and the text report.
pub const RECORD_COLUMNS: [&str; 13] = [
    "IP",
    "Country",
    "Region",
    "City",
    "ZIP",
    "Latitude",
    "Longitude",
    "ISP",
    "Org",
    "AS",
    "Timezone",
    "Currency",
    "Reverse DNS",
];
