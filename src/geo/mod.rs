//! Geolocation lookups against a remote provider.
//!
//! This module provides:
//! - `GeoInfo`, the typed, once-decoded provider response
//! - `GeoClient`, which issues one request per IP
//! - The `GeoLookup` trait used by the batch pipeline

mod client;
mod types;

// Re-export public API
pub use client::{parse_response, GeoClient, GeoLookup};
pub use types::{GeoInfo, GeoResult};
