//! Batch lookup pipeline.
//!
//! For every input IP: geolocate, then (on success) resolve reverse DNS and
//! build a `Record`. Failures are collected per IP and never stop the batch.
//! Results are reassembled in input order regardless of concurrency.

use std::time::Instant;

use futures::stream::{self, StreamExt};
use log::warn;

use crate::app::log_progress;
use crate::config::{DEFAULT_MAX_CONCURRENCY, LOGGING_INTERVAL};
use crate::dns::ReverseLookup;
use crate::error_handling::{FailureKind, FailureStats, LookupError};
use crate::geo::GeoLookup;
use crate::record::Record;

/// An IP whose geolocation lookup failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchFailure {
    /// The input line, verbatim
    pub ip: String,
    /// Human-readable failure reason
    pub reason: String,
    /// Failure category
    pub kind: FailureKind,
}

/// Result of a batch run. Both vectors follow input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Records for the IPs that were geolocated
    pub records: Vec<Record>,
    /// IPs whose lookup failed, with reasons
    pub failures: Vec<BatchFailure>,
}

impl BatchOutcome {
    /// Number of IPs processed.
    pub fn total(&self) -> usize {
        self.records.len() + self.failures.len()
    }
}

/// Drives lookups for a list of IPs.
pub struct BatchPipeline<G, R> {
    geo: G,
    resolver: R,
    max_concurrency: usize,
}

impl<G, R> BatchPipeline<G, R>
where
    G: GeoLookup,
    R: ReverseLookup,
{
    /// Creates a strictly sequential pipeline.
    pub fn new(geo: G, resolver: R) -> Self {
        Self {
            geo,
            resolver,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }

    /// Allows up to `limit` IPs in flight at once (minimum 1).
    pub fn with_max_concurrency(mut self, limit: usize) -> Self {
        self.max_concurrency = limit.max(1);
        self
    }

    /// Processes `ips` in order.
    ///
    /// IPs are used verbatim; malformed ones surface as lookup failures. An
    /// empty slice yields an empty outcome.
    pub async fn run(&self, ips: &[String]) -> BatchOutcome {
        self.run_with_stats(ips, &FailureStats::new()).await
    }

    /// Like [`run`](Self::run), also tallying failures into `stats`.
    pub async fn run_with_stats(&self, ips: &[String], stats: &FailureStats) -> BatchOutcome {
        let start_time = Instant::now();
        let mut outcome = BatchOutcome::default();

        // `buffered` yields in submission order, so output order equals input
        // order even when several lookups overlap.
        let mut results = stream::iter(ips.iter().map(|ip| self.process(ip)))
            .buffered(self.max_concurrency);

        let mut processed = 0usize;
        while let Some((ip, result)) = results.next().await {
            match result {
                Ok(record) => outcome.records.push(record),
                Err(e) => {
                    warn!("Error for IP {ip}: {e}");
                    stats.increment(e.kind());
                    outcome.failures.push(BatchFailure {
                        ip: ip.to_string(),
                        reason: e.to_string(),
                        kind: e.kind(),
                    });
                }
            }

            processed += 1;
            if processed % LOGGING_INTERVAL == 0 {
                log_progress(start_time, processed, ips.len());
            }
        }

        outcome
    }

    async fn process<'a>(&self, ip: &'a str) -> (&'a str, Result<Record, LookupError>) {
        let geo = match self.geo.lookup(ip).await {
            Ok(geo) => geo,
            Err(e) => return (ip, Err(e)),
        };
        let reverse_dns = self.resolver.resolve(ip).await;
        (ip, Ok(Record::build(&geo, reverse_dns)))
    }
}
