//! Flat, export-ready lookup records.
//!
//! A `Record` merges one successful geolocation response with the reverse DNS
//! name of the same IP. Construction is pure: no I/O happens here.

mod coordinate;

use serde::{Deserialize, Serialize};

use crate::geo::GeoInfo;

pub use coordinate::{CoordinateError, LocationCoordinate};

/// One row of batch output.
///
/// Every field is a plain string; values the provider did not return are
/// empty. Serde names match the CSV header columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// IP as echoed by the provider
    #[serde(rename = "IP")]
    pub ip: String,
    /// Country code
    #[serde(rename = "Country")]
    pub country: String,
    /// Region or state
    #[serde(rename = "Region")]
    pub region: String,
    /// City
    #[serde(rename = "City")]
    pub city: String,
    /// Postal code
    #[serde(rename = "ZIP")]
    pub zip: String,
    /// Latitude text from `loc`
    #[serde(rename = "Latitude")]
    pub latitude: String,
    /// Longitude text from `loc`
    #[serde(rename = "Longitude")]
    pub longitude: String,
    /// Same value as `org`: the provider has a single organization field
    #[serde(rename = "ISP")]
    pub isp: String,
    /// Provider organization
    #[serde(rename = "Org")]
    pub org: String,
    /// Autonomous system
    #[serde(rename = "AS")]
    pub as_number: String,
    /// Timezone name
    #[serde(rename = "Timezone")]
    pub timezone: String,
    /// Currency code
    #[serde(rename = "Currency")]
    pub currency: String,
    /// PTR hostname of the input IP, or `"Unknown"`
    #[serde(rename = "Reverse DNS")]
    pub reverse_dns: String,
}

impl Record {
    /// Builds a record from a successful lookup and its reverse DNS name.
    ///
    /// A missing or malformed `loc` leaves latitude and longitude empty. The
    /// provider's `org` fills both the `isp` and `org` columns.
    pub fn build(geo: &GeoInfo, reverse_dns: impl Into<String>) -> Self {
        let (latitude, longitude) = geo
            .loc
            .as_deref()
            .and_then(|loc| LocationCoordinate::parse(loc).ok())
            .map(|coord| (coord.latitude, coord.longitude))
            .unwrap_or_default();
        let org = text(&geo.org);

        Self {
            ip: text(&geo.ip),
            country: text(&geo.country),
            region: text(&geo.region),
            city: text(&geo.city),
            zip: text(&geo.postal),
            latitude,
            longitude,
            isp: org.clone(),
            org,
            as_number: text(&geo.as_number),
            timezone: text(&geo.timezone),
            currency: text(&geo.currency),
            reverse_dns: reverse_dns.into(),
        }
    }

    /// Field values in column order (see `RECORD_COLUMNS`).
    pub fn to_row(&self) -> [&str; 13] {
        [
            self.ip.as_str(),
            self.country.as_str(),
            self.region.as_str(),
            self.city.as_str(),
            self.zip.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.isp.as_str(),
            self.org.as_str(),
            self.as_number.as_str(),
            self.timezone.as_str(),
            self.currency.as_str(),
            self.reverse_dns.as_str(),
        ]
    }
}

fn text(field: &Option<String>) -> String {
    field.clone().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RECORD_COLUMNS;

    fn google() -> GeoInfo {
        GeoInfo {
            ip: Some("8.8.8.8".into()),
            country: Some("US".into()),
            loc: Some("37.4,-122.0".into()),
            org: Some("AS15169 Google LLC".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_google_scenario() {
        let record = Record::build(&google(), "dns.google");
        assert_eq!(record.ip, "8.8.8.8");
        assert_eq!(record.country, "US");
        assert_eq!(record.latitude, "37.4");
        assert_eq!(record.longitude, "-122.0");
        assert_eq!(record.isp, "AS15169 Google LLC");
        assert_eq!(record.org, "AS15169 Google LLC");
        assert_eq!(record.reverse_dns, "dns.google");
    }

    #[test]
    fn test_build_missing_fields_are_empty() {
        let record = Record::build(&GeoInfo::default(), "Unknown");
        for (column, value) in RECORD_COLUMNS.iter().zip(record.to_row()) {
            if *column == "Reverse DNS" {
                assert_eq!(value, "Unknown");
            } else {
                assert_eq!(value, "", "{column} should be empty");
            }
        }
    }

    #[test]
    fn test_build_coordinate_without_comma() {
        for loc in ["", "37.4"] {
            let geo = GeoInfo {
                loc: Some(loc.to_string()),
                ..google()
            };
            let record = Record::build(&geo, "x");
            assert_eq!(record.latitude, "");
            assert_eq!(record.longitude, "");
        }
    }

    #[test]
    fn test_isp_always_equals_org() {
        for org in [None, Some(""), Some("AS13335 Cloudflare, Inc.")] {
            let geo = GeoInfo {
                org: org.map(str::to_string),
                ..Default::default()
            };
            let record = Record::build(&geo, "");
            assert_eq!(record.isp, record.org);
        }
    }

    #[test]
    fn test_row_has_one_value_per_column() {
        let record = Record::build(&google(), "dns.google");
        let row = record.to_row();
        assert_eq!(row.len(), RECORD_COLUMNS.len());
        assert_eq!(row[0], "8.8.8.8");
        assert_eq!(row[12], "dns.google");
    }
}
