//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for reverse lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` or the platform
/// equivalent) so PTR answers match what the host itself would see. Falls back
/// to the library default configuration when the system one cannot be read.
///
/// # Returns
///
/// A `TokioAsyncResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, opts) = match read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Could not read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    Arc::new(TokioAsyncResolver::tokio(config, opts))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_resolver_builds() {
        let resolver = init_resolver();
        assert!(Arc::strong_count(&resolver) == 1);
    }
}
