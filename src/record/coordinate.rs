//! Location coordinate parsing.

use thiserror::Error;

/// The provider's `loc` field could not be split into latitude and longitude.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed location {source_text:?}: expected \"<latitude>,<longitude>\"")]
pub struct CoordinateError {
    /// The rejected input
    pub source_text: String,
}

/// A `(latitude, longitude)` pair taken from a comma-joined `loc` string.
///
/// Both parts are kept verbatim so exports reproduce the provider's text
/// exactly (`"-122.0"` stays `"-122.0"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCoordinate {
    /// First part of `loc`
    pub latitude: String,
    /// Second part of `loc`
    pub longitude: String,
}

impl LocationCoordinate {
    /// Parses `"<latitude>,<longitude>"`.
    ///
    /// Part 0 is the latitude and part 1 the longitude; anything after a
    /// second comma is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateError` when the input has fewer than two
    /// comma-separated parts (including the empty string).
    pub fn parse(loc: &str) -> Result<Self, CoordinateError> {
        let mut parts = loc.split(',');
        match (parts.next(), parts.next()) {
            (Some(latitude), Some(longitude)) => Ok(Self {
                latitude: latitude.to_string(),
                longitude: longitude.to_string(),
            }),
            _ => Err(CoordinateError {
                source_text: loc.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let coord = LocationCoordinate::parse("37.4,-122.0").unwrap();
        assert_eq!(coord.latitude, "37.4");
        assert_eq!(coord.longitude, "-122.0");
    }

    #[test]
    fn test_parse_keeps_text_verbatim() {
        let coord = LocationCoordinate::parse(" 51.5085, -0.1257").unwrap();
        assert_eq!(coord.latitude, " 51.5085");
        assert_eq!(coord.longitude, " -0.1257");
    }

    #[test]
    fn test_parse_ignores_extra_parts() {
        let coord = LocationCoordinate::parse("1,2,3").unwrap();
        assert_eq!(coord.latitude, "1");
        assert_eq!(coord.longitude, "2");
    }

    #[test]
    fn test_parse_empty_parts_are_allowed() {
        let coord = LocationCoordinate::parse(",").unwrap();
        assert_eq!(coord.latitude, "");
        assert_eq!(coord.longitude, "");
    }

    #[test]
    fn test_parse_without_comma_fails() {
        for loc in ["", "37.4", "37.4 -122.0"] {
            let err = LocationCoordinate::parse(loc).unwrap_err();
            assert_eq!(err.source_text, loc);
        }
    }
}
