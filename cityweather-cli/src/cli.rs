use std::{fmt, sync::Arc};

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand};
use cityweather_core::{Config, ResultCache, WeatherClient, WeatherService, catalog};
use inquire::{CustomType, Select, Text};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather and forecasts for European capitals")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the supported cities and their coordinates.
    Cities,

    /// Show current weather for every city.
    List {
        /// Skip the cache and fetch fresh data.
        #[arg(long)]
        refresh: bool,
    },

    /// Show current conditions and the daily forecast for one city.
    Detail {
        /// City name, case-insensitive, e.g. "berlin".
        city: String,
    },

    /// Browse the list and city details interactively.
    Browse,

    /// Set request timeouts and the log filter.
    Configure,
}

impl Cli {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        match self.command {
            Command::Cities => {
                print!("{}", render::cities(catalog::all()));
            }
            Command::List { refresh } => {
                let service = build_service(&config)?;
                let results = service.load(refresh).await?;
                print!("{}", render::city_list(&results));
            }
            Command::Detail { city } => {
                let service = build_service(&config)?;
                let detail = service.load_detail(&city).await?;
                print!("{}", render::city_detail(&detail, Local::now().date_naive()));
            }
            Command::Browse => {
                let service = build_service(&config)?;
                browse(&service).await?;
            }
            Command::Configure => {
                configure(config)?;
            }
        }

        Ok(())
    }
}

fn build_service(config: &Config) -> anyhow::Result<WeatherService> {
    let client = WeatherClient::new(config.transport()?);
    Ok(WeatherService::new(Arc::new(client), ResultCache::new()))
}

#[derive(Debug, Clone, Copy)]
enum BrowseAction {
    List,
    Refresh,
    Detail,
    Quit,
}

impl fmt::Display for BrowseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BrowseAction::List => "Show all cities",
            BrowseAction::Refresh => "Refresh all cities",
            BrowseAction::Detail => "Forecast for a city",
            BrowseAction::Quit => "Quit",
        })
    }
}

/// One service for the whole session, so the list is only fetched again on "Refresh".
async fn browse(service: &WeatherService) -> anyhow::Result<()> {
    let actions = vec![BrowseAction::List, BrowseAction::Refresh, BrowseAction::Detail, BrowseAction::Quit];

    loop {
        let action = Select::new("What would you like to see?", actions.clone()).prompt()?;
        tracing::debug!(%action, "browse action selected");

        match action {
            BrowseAction::List | BrowseAction::Refresh => {
                let force = matches!(action, BrowseAction::Refresh);
                match service.load(force).await {
                    Ok(results) => print!("{}", render::city_list(&results)),
                    Err(err) => {
                        tracing::warn!(error = ?err, force, "loading city list failed");
                        eprintln!("Error: {err}");
                    }
                }
            }
            BrowseAction::Detail => {
                let names: Vec<&str> = catalog::all().iter().map(|city| city.name).collect();
                let city = Select::new("City:", names).prompt()?;
                match service.load_detail(city).await {
                    Ok(detail) => print!("{}", render::city_detail(&detail, Local::now().date_naive())),
                    Err(err) => {
                        tracing::warn!(error = ?err, city, "loading city detail failed");
                        eprintln!("Error: {err}");
                    }
                }
            }
            BrowseAction::Quit => return Ok(()),
        }
    }
}

fn configure(mut config: Config) -> anyhow::Result<()> {
    config.timeout_secs = CustomType::<u64>::new("Request timeout (seconds):")
        .with_default(config.timeout_secs)
        .prompt()?;

    config.connect_timeout_secs = CustomType::<u64>::new("Connect timeout (seconds):")
        .with_default(config.connect_timeout_secs)
        .prompt()?;

    let filter = Text::new("Log filter (leave empty for the default):")
        .with_default(config.log_filter.as_deref().unwrap_or(""))
        .prompt()?;
    config.log_filter = Some(filter.trim().to_string()).filter(|f| !f.is_empty());

    config.save().context("Failed to save configuration")?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
