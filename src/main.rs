//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_locator` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use ip_locator::config::{
    DEFAULT_BASE_URL, DEFAULT_MAX_CONCURRENCY, DEFAULT_USER_AGENT, TOKEN_ENV_VAR,
};
use ip_locator::initialization::init_logger_with;
use ip_locator::{run_batch, run_single, Config, ExportFormat, LogFormat, LogLevel};

/// IP geolocation tool with reverse DNS lookup.
#[derive(Debug, Parser)]
#[command(name = "ip_locator", version, about)]
struct Cli {
    /// IP address, or path to a file with one IP per line in batch mode
    input: String,

    /// Enable batch processing
    #[arg(short, long)]
    batch: bool,

    /// Output file for batch processing
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format for batch processing
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,

    /// Geolocation provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Provider API token
    #[arg(long, env = TOKEN_ENV_VAR, hide_env_values = true)]
    token: Option<String>,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Number of IPs looked up at once (1 = sequential)
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            log_level: cli.log_level,
            log_format: cli.log_format,
            base_url: cli.base_url,
            token: cli.token,
            user_agent: cli.user_agent,
            output: cli.output,
            format: cli.format,
            max_concurrency: cli.max_concurrency,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env (e.g. IPINFO_TOKEN) before clap reads the environment
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let batch = cli.batch;
    let input = cli.input.clone();
    let config = Config::from(cli);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    let result = if batch {
        // Per-IP failures are already reported as warnings while the batch runs
        run_batch(&config, Path::new(&input)).await.map(|report| {
            println!(
                "Batch processing complete. {} of {} IP{} saved to {}",
                report.successful,
                report.total,
                if report.total == 1 { "" } else { "s" },
                report.output.display()
            );
        })
    } else {
        run_single(&config, &input)
            .await
            .map(|report| print!("{report}"))
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }

    Ok(())
}
