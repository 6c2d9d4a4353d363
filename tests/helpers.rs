// Shared test helpers for mock provider setup and fake resolvers.
//
// This module provides common utilities used across multiple test files to reduce duplication.
#![allow(dead_code)]

use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ip_locator::{GeoClient, ReverseLookup};

/// Mounts a 200 JSON response for `/<ip>/json`.
pub async fn mock_lookup(server: &MockServer, ip: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{ip}/json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mounts a bare status response for `/<ip>/json`.
pub async fn mock_status(server: &MockServer, ip: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/{ip}/json")))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Creates a client pointed at the mock provider.
pub fn mock_client(server: &MockServer) -> GeoClient {
    GeoClient::new(Arc::new(reqwest::Client::new()), server.uri())
}

/// Reverse resolver answering from a fixed table, `"Unknown"` otherwise.
pub struct StaticDns(pub Vec<(&'static str, &'static str)>);

impl ReverseLookup for StaticDns {
    async fn resolve(&self, ip: &str) -> String {
        self.0
            .iter()
            .find(|(key, _)| *key == ip)
            .map(|(_, host)| host.to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}
