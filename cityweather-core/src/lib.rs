//! Core library for the `cityweather` CLI.
//!
//! This crate defines:
//! - The fixed city catalog and the forecast endpoint it is queried against
//! - An HTTP transport and a typed weather client on top of it
//! - Concurrent aggregation of current weather across all cities, with an in-memory cache
//! - Mapping of daily forecast series into display rows
//!
//! It is used by `cityweather-cli`, but the service and its seams (`Transport`,
//! `WeatherApi`) can be reused by other front ends.

pub mod aggregate;
pub mod cache;
pub mod catalog;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod forecast;
pub mod model;
pub mod service;
pub mod transport;

pub use cache::ResultCache;
pub use catalog::City;
pub use client::{WeatherApi, WeatherClient};
pub use config::Config;
pub use error::{AggregateError, ServiceError, TransportError, WeatherError};
pub use forecast::{IconCategory, day_label, icon_category_of, map_daily_series};
pub use model::{CityDetail, CityWeatherResult, DailyForecastEntry, DailySeries, WeatherResponse};
pub use service::WeatherService;
pub use transport::{HttpTransport, Transport};
