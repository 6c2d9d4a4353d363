//! DNS module tests.

use super::resolution::first_hostname;
use super::*;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::Name;
use hickory_resolver::TokioAsyncResolver;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;

/// Creates a resolver whose only nameserver is a closed local port, so every
/// query fails quickly without touching the network.
fn create_unreachable_resolver() -> TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_millis(500);
    opts.attempts = 1;

    let nameservers =
        NameServerConfigGroup::from_ips_clear(&[IpAddr::V4(Ipv4Addr::LOCALHOST)], 9, true);
    let config = ResolverConfig::from_parts(None, vec![], nameservers);
    TokioAsyncResolver::tokio(config, opts)
}

#[tokio::test]
async fn test_reverse_dns_lookup_rejects_malformed_address() {
    let resolver = create_unreachable_resolver();
    let result = reverse_dns_lookup("not-an-ip", &resolver).await;
    assert!(result.is_err(), "malformed address should not parse");
}

#[tokio::test]
async fn test_reverse_dns_lookup_failure_is_none() {
    let resolver = create_unreachable_resolver();
    let result = reverse_dns_lookup("192.0.2.1", &resolver).await;
    assert!(matches!(result, Ok(None)));
}

#[tokio::test]
async fn test_resolve_malformed_address_is_unknown() {
    let resolver = ReverseResolver::new(Arc::new(create_unreachable_resolver()));
    assert_eq!(resolver.resolve("999.999.999.999").await, "Unknown");
    assert_eq!(resolver.resolve("").await, "Unknown");
}

#[tokio::test]
async fn test_resolve_without_ptr_is_unknown() {
    let resolver = ReverseResolver::new(Arc::new(create_unreachable_resolver()));
    assert_eq!(resolver.resolve("192.0.2.1").await, "Unknown");
    assert_eq!(resolver.resolve("2001:db8::1").await, "Unknown");
}

fn name(text: &str) -> Name {
    Name::from_ascii(text).unwrap()
}

#[test]
fn test_first_hostname_strips_root_dot() {
    let names = [name("dns.google.")];
    assert_eq!(first_hostname(names.iter()), Some("dns.google".to_string()));
}

#[test]
fn test_first_hostname_relative_name_unchanged() {
    let names = [name("one.one.one.one")];
    assert_eq!(
        first_hostname(names.iter()),
        Some("one.one.one.one".to_string())
    );
}

#[test]
fn test_first_hostname_takes_first_of_many() {
    let names = [name("a.example.com."), name("b.example.com.")];
    assert_eq!(first_hostname(names.iter()), Some("a.example.com".to_string()));
}

#[test]
fn test_first_hostname_root_or_empty_is_none() {
    assert_eq!(first_hostname([Name::root()].iter()), None);
    assert_eq!(first_hostname(Vec::<Name>::new()), None);
}
