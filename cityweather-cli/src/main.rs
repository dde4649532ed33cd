//! Binary crate for the `cityweather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration and browsing
//! - Human-friendly output formatting

use clap::Parser;
use cityweather_core::Config;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    let config = Config::load()?;
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    cmd.run(config).await
}

/// `RUST_LOG` wins, then the configured filter, then `warn`. Logs go to stderr.
fn init_tracing(config: &Config) {
    let fallback = config.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
