//! Reverse DNS lookup.
//!
//! This module provides the PTR lookup itself and the `ReverseResolver` wrapper
//! that maps every failure to the `"Unknown"` sentinel.

use std::fmt::Display;
use std::future::Future;
use std::sync::Arc;

use anyhow::{Error, Result};
use hickory_resolver::TokioAsyncResolver;

use crate::config::UNKNOWN_HOSTNAME;

/// Something that can map an IP address to a hostname.
pub trait ReverseLookup {
    /// Returns the hostname for `ip`, or `"Unknown"`. Never fails.
    fn resolve(&self, ip: &str) -> impl Future<Output = String> + Send;
}

/// Best-effort reverse DNS resolver.
#[derive(Clone)]
pub struct ReverseResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl ReverseResolver {
    /// Wraps a shared resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }

    /// Resolves `ip` to its first PTR hostname.
    ///
    /// Malformed addresses, missing PTR records and resolver errors all yield
    /// `"Unknown"`.
    pub async fn resolve(&self, ip: &str) -> String {
        match reverse_dns_lookup(ip, &self.resolver).await {
            Ok(Some(name)) => name,
            Ok(None) => UNKNOWN_HOSTNAME.to_string(),
            Err(e) => {
                log::debug!("Skipping reverse DNS lookup for {ip:?}: {e}");
                UNKNOWN_HOSTNAME.to_string()
            }
        }
    }
}

impl ReverseLookup for ReverseResolver {
    fn resolve(&self, ip: &str) -> impl Future<Output = String> + Send {
        ReverseResolver::resolve(self, ip)
    }
}

/// Performs a reverse DNS lookup (PTR record) for an IP address.
///
/// # Returns
///
/// The first reverse DNS name without its trailing root dot, or `None` if the
/// lookup fails or returns no records.
///
/// # Errors
///
/// Returns an error if `ip` is not a valid IP address.
pub async fn reverse_dns_lookup(
    ip: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Option<String>, Error> {
    match resolver.reverse_lookup(ip.parse()?).await {
        Ok(response) => Ok(first_hostname(response.iter())),
        Err(e) => {
            log::debug!("Failed to perform reverse DNS lookup for {ip}: {e}");
            Ok(None)
        }
    }
}

/// Picks the first PTR name, without its trailing root dot.
///
/// Returns `None` when there are no names or the first one is the root.
pub(crate) fn first_hostname<N: Display>(names: impl IntoIterator<Item = N>) -> Option<String> {
    names
        .into_iter()
        .next()
        .map(|name| name.to_string().trim_end_matches('.').to_string())
        .filter(|name| !name.is_empty())
}
