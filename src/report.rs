//! Single-lookup text report.

use crate::config::{NOT_AVAILABLE, RECORD_COLUMNS};
use crate::geo::GeoInfo;
use crate::record::LocationCoordinate;

/// Renders one lookup as labeled lines in the fixed column order.
///
/// Fields the provider did not return print as `N/A`. A missing or malformed
/// `loc` prints `N/A` for both latitude and longitude.
pub fn render(geo: &GeoInfo, reverse_dns: &str) -> String {
    let coordinate = geo
        .loc
        .as_deref()
        .and_then(|loc| LocationCoordinate::parse(loc).ok());
    let (latitude, longitude) = match &coordinate {
        Some(c) => (Some(c.latitude.as_str()), Some(c.longitude.as_str())),
        None => (None, None),
    };

    let values: [Option<&str>; 13] = [
        geo.ip.as_deref(),
        geo.country.as_deref(),
        geo.region.as_deref(),
        geo.city.as_deref(),
        geo.postal.as_deref(),
        latitude,
        longitude,
        geo.org.as_deref(),
        geo.org.as_deref(),
        geo.as_number.as_deref(),
        geo.timezone.as_deref(),
        geo.currency.as_deref(),
        Some(reverse_dns),
    ];

    let mut report = String::from("\nGeolocation Information:\n\n");
    for (label, value) in RECORD_COLUMNS.iter().zip(values) {
        report.push_str(&format!("{label}: {}\n", value.unwrap_or(NOT_AVAILABLE)));
    }
    report
}
