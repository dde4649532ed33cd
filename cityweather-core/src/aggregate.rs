//! Concurrent current-weather lookup for a list of cities.
//!
//! Every city gets its own task; failures stay local to that city's row. Rows are
//! sorted by city name once all tasks have finished, so task completion order never
//! shows through.

use std::sync::Arc;

use futures::future::join_all;
use tokio::runtime::Handle;
use tokio::task::JoinError;

use crate::catalog::City;
use crate::client::WeatherApi;
use crate::error::{AggregateError, WeatherError};
use crate::model::{CityWeatherResult, WeatherResponse, celsius_label};

pub const MISSING_TEMPERATURE: &str = "--";

/// Fetch current weather for every city concurrently and return one row per city,
/// ordered by city name.
///
/// Only fails when there is no tokio runtime to spawn the per-city tasks on.
#[tracing::instrument(level = "debug", skip_all, fields(cities = catalog.len()))]
pub async fn aggregate(
    api: Arc<dyn WeatherApi>,
    catalog: &[City],
) -> Result<Vec<CityWeatherResult>, AggregateError> {
    let runtime = Handle::try_current()?;

    let tasks: Vec<_> = catalog
        .iter()
        .map(|city| {
            let api = Arc::clone(&api);
            let city = *city;
            runtime.spawn(async move {
                let outcome = api.fetch_current(city.latitude, city.longitude).await;
                to_result(city.name, outcome)
            })
        })
        .collect();

    let mut results: Vec<_> = catalog
        .iter()
        .zip(join_all(tasks).await)
        .map(|(city, joined)| joined.unwrap_or_else(|err| task_failed(city.name, &err)))
        .collect();

    results.sort_by(|a, b| a.city_name.cmp(&b.city_name));

    let failed = results.iter().filter(|r| r.temperature_label == MISSING_TEMPERATURE).count();
    tracing::info!(total = results.len(), failed, "aggregated current weather");

    Ok(results)
}

/// Fold one city's fetch outcome into its display row.
pub fn to_result(city_name: &str, outcome: Result<WeatherResponse, WeatherError>) -> CityWeatherResult {
    match outcome {
        Ok(WeatherResponse { current: Some(current), .. }) => CityWeatherResult {
            city_name: city_name.to_string(),
            temperature_label: celsius_label(current.temperature),
            status_description: format!("Code: {}", current.weather_code),
        },
        Ok(_) => CityWeatherResult {
            city_name: city_name.to_string(),
            temperature_label: MISSING_TEMPERATURE.to_string(),
            status_description: "No data".to_string(),
        },
        Err(err) => {
            tracing::warn!(city = city_name, error = %err, "weather fetch failed");
            error_row(city_name, &err)
        }
    }
}

/// A task that panicked or was cancelled still gets its row.
fn task_failed(city_name: &str, err: &JoinError) -> CityWeatherResult {
    tracing::error!(city = city_name, error = %err, "weather task did not complete");
    error_row(city_name, err)
}

fn error_row(city_name: &str, err: &dyn std::fmt::Display) -> CityWeatherResult {
    CityWeatherResult {
        city_name: city_name.to_string(),
        temperature_label: MISSING_TEMPERATURE.to_string(),
        status_description: format!("Error: {err}"),
    }
}
