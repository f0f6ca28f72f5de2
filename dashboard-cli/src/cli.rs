use std::{
    io::{self, Write},
    process::ExitCode,
    sync::Arc,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, Dashboard, ReqwestFetcher, format_message};
use inquire::{CustomType, Text};
use tracing::{debug, info};

/// Exit status of `show` when any source could not be retrieved.
const AGGREGATION_FAILED: u8 = 1;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "dashboard",
    version,
    about = "Travel dashboard: destination, weather and airport at a glance"
)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors. The raw source data is still printed to stderr.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactively set the service address, default query and timeout.
    Configure,

    /// Show the dashboard for a place.
    Show {
        /// Search term, e.g. "london"; falls back to the configured query.
        query: Option<String>,

        /// Base URL of the destinations/weathers/airports service.
        #[arg(long, env = "DASHBOARD_BASE_URL")]
        base_url: Option<String>,

        /// Per-request timeout in seconds; 0 disables it.
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Print the summary as JSON instead of the text message.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Command::Configure => configure(),
            Command::Show {
                query,
                base_url,
                timeout,
                json,
            } => {
                let mut config = Config::load()?;
                if let Some(query) = query {
                    config.query = query;
                }
                if let Some(base_url) = base_url {
                    config.base_url = base_url;
                }
                if let Some(timeout) = timeout {
                    config.timeout_secs = timeout;
                }
                config.validate()?;
                debug!(?config, "effective configuration");

                let fetcher = ReqwestFetcher::new(config.timeout())?;
                let dashboard = Dashboard::new(&config.base_url, Arc::new(fetcher))?;

                let status = show(
                    &dashboard,
                    &config.query,
                    json,
                    &mut io::stdout(),
                    &mut io::stderr(),
                )
                .await?;

                Ok(ExitCode::from(status))
            }
        }
    }
}

/// Print the raw source data to `err` and the dashboard to `out`.
///
/// Returns the process exit status.
async fn show(
    dashboard: &Dashboard,
    query: &str,
    json: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<u8> {
    let report = match dashboard.fetch(query).await {
        Ok(report) => report,
        Err(e) => {
            // The cause has already been logged by the aggregator.
            writeln!(err, "Error: {e}")?;
            return Ok(AGGREGATION_FAILED);
        }
    };

    let raw = serde_json::to_string_pretty(&report).context("Failed to serialize raw data")?;
    writeln!(err, "Aggregated data: {raw}")?;

    let summary = report.summary();
    if json {
        let summary =
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        writeln!(out, "{summary}")?;
    } else {
        write!(out, "{}", format_message(&summary))?;
    }

    Ok(0)
}

fn configure() -> anyhow::Result<ExitCode> {
    let current = Config::load()?;

    let base_url = Text::new("Service base URL:")
        .with_default(&current.base_url)
        .prompt()
        .context("Failed to read base URL")?;

    let query = Text::new("Default search query:")
        .with_default(&current.query)
        .prompt()
        .context("Failed to read default query")?;

    let timeout_secs = CustomType::<u64>::new("Request timeout in seconds (0 disables):")
        .with_default(current.timeout_secs)
        .with_error_message("Please type a whole number of seconds")
        .prompt()
        .context("Failed to read timeout")?;

    let config = Config {
        base_url,
        query,
        timeout_secs,
    };
    config.validate()?;

    let path = config.save()?;
    info!(path = %path.display(), "configuration saved");
    println!("Configuration saved to {}", path.display());

    Ok(ExitCode::SUCCESS)
}
