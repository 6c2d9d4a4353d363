//! ip_locator library: IP geolocation with reverse DNS enrichment
//!
//! This library looks up IP addresses against an ipinfo-style geolocation
//! provider, adds the reverse DNS name of each address, and produces either a
//! text report for a single address or a CSV/JSONL dataset for a batch.
//!
//! # Example
//!
//! ```no_run
//! use ip_locator::{run_batch, Config};
//! use std::path::{Path, PathBuf};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output: Some(PathBuf::from("results.csv")),
//!     ..Default::default()
//! };
//!
//! let report = run_batch(&config, Path::new("ips.txt")).await?;
//! println!("{} succeeded, {} failed", report.successful, report.failed);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod geo;
pub mod initialization;
pub mod pipeline;
pub mod record;
pub mod report;

// Re-export public API
pub use config::{Config, ExportFormat, LogFormat, LogLevel};
pub use dns::{ReverseLookup, ReverseResolver};
pub use error_handling::{FailureKind, LookupError, RunError};
pub use geo::{GeoClient, GeoInfo, GeoLookup, GeoResult};
pub use pipeline::{BatchFailure, BatchOutcome, BatchPipeline};
pub use record::{LocationCoordinate, Record};
pub use run::{run_batch, run_single, run_single_with, BatchReport};

// Run entry points (batch and single lookup)
mod run {
    use anyhow::{Context, Result};
    use log::info;
    use std::path::{Path, PathBuf};
    use std::time::Instant;

    use crate::app::{print_batch_summary, print_failure_statistics, read_ip_list};
    use crate::config::Config;
    use crate::dns::{ReverseLookup, ReverseResolver};
    use crate::error_handling::{FailureStats, RunError};
    use crate::export::export_records;
    use crate::geo::GeoClient;
    use crate::initialization::{init_client, init_resolver};
    use crate::pipeline::{BatchFailure, BatchPipeline};
    use crate::report::render;

    /// Results of a batch run.
    #[derive(Debug, Clone)]
    pub struct BatchReport {
        /// Number of IPs read from the input file
        pub total: usize,
        /// Number of IPs written to the output file
        pub successful: usize,
        /// Number of IPs whose lookup failed
        pub failed: usize,
        /// Failed IPs with their reasons, in input order
        pub failures: Vec<BatchFailure>,
        /// File the records were written to
        pub output: PathBuf,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    fn geo_client(config: &Config) -> Result<GeoClient> {
        let client = init_client(config).context("Failed to initialize HTTP client")?;
        Ok(GeoClient::new(client, config.base_url.clone()).with_token(config.token.clone()))
    }

    /// Looks up every IP in `input` and writes the successful ones to
    /// `config.output`.
    ///
    /// Per-IP failures are logged as warnings and returned in the report; they
    /// never abort the run. The output file is only created after all lookups
    /// have finished.
    ///
    /// # Errors
    ///
    /// - `RunError::MissingOutput` if `config.output` is `None` (checked
    ///   before the input file is touched)
    /// - `RunError::InputFile` if the input file cannot be read
    /// - `RunError::Output` or a write error if the output cannot be written
    pub async fn run_batch(config: &Config, input: &Path) -> Result<BatchReport> {
        let output = config.output.clone().ok_or(RunError::MissingOutput)?;
        let ips = read_ip_list(input).await?;
        info!("Total IPs in file: {}", ips.len());

        let start_time = Instant::now();
        let geo = geo_client(config)?;
        let resolver = ReverseResolver::new(init_resolver());
        let pipeline =
            BatchPipeline::new(geo, resolver).with_max_concurrency(config.max_concurrency);

        let stats = FailureStats::new();
        let outcome = pipeline.run_with_stats(&ips, &stats).await;

        let written = export_records(&outcome.records, &output, config.format)
            .with_context(|| format!("Failed to export results to {}", output.display()))?;
        info!("Wrote {} records to {}", written, output.display());

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        print_failure_statistics(&stats);
        print_batch_summary(
            outcome.total(),
            outcome.records.len(),
            outcome.failures.len(),
            elapsed_seconds,
        );

        Ok(BatchReport {
            total: outcome.total(),
            successful: outcome.records.len(),
            failed: outcome.failures.len(),
            failures: outcome.failures,
            output,
            elapsed_seconds,
        })
    }

    /// Looks up a single IP and renders the text report.
    ///
    /// # Errors
    ///
    /// A failed lookup is fatal here and is returned as the error; its message
    /// is the failure reason.
    pub async fn run_single(config: &Config, ip: &str) -> Result<String> {
        let resolver = ReverseResolver::new(init_resolver());
        run_single_with(config, ip, &resolver).await
    }

    /// Like [`run_single`], resolving reverse DNS through `resolver`.
    ///
    /// The input `ip` is resolved, not the address echoed by the provider.
    pub async fn run_single_with<R: ReverseLookup>(
        config: &Config,
        ip: &str,
        resolver: &R,
    ) -> Result<String> {
        let geo = geo_client(config)?;
        let info = geo.lookup(ip).await?;
        let reverse_dns = resolver.resolve(ip).await;

        Ok(render(&info, &reverse_dns))
    }
}
