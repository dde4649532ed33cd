use std::sync::Arc;

use crate::aggregate::{MISSING_TEMPERATURE, aggregate};
use crate::cache::ResultCache;
use crate::catalog::{self, City};
use crate::client::WeatherApi;
use crate::error::ServiceError;
use crate::forecast::{IconCategory, icon_category_of, map_daily_series};
use crate::model::{CityDetail, CityWeatherResult, celsius_label};

/// Entry point for the list and detail views.
#[derive(Debug, Clone)]
pub struct WeatherService {
    api: Arc<dyn WeatherApi>,
    cities: &'static [City],
    cache: ResultCache,
}

impl WeatherService {
    /// Service over the full catalog.
    pub fn new(api: Arc<dyn WeatherApi>, cache: ResultCache) -> Self {
        Self::with_cities(api, cache, catalog::all())
    }

    pub fn with_cities(api: Arc<dyn WeatherApi>, cache: ResultCache, cities: &'static [City]) -> Self {
        Self { api, cities, cache }
    }

    /// Current weather for every city, sorted by name.
    ///
    /// Served from the cache when it holds a non-empty list, unless `force_reload` is set.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load(&self, force_reload: bool) -> Result<Vec<CityWeatherResult>, ServiceError> {
        if force_reload {
            self.cache.clear();
        } else if let Some(cached) = self.cache.get().filter(|results| !results.is_empty()) {
            return Ok(cached);
        }

        let results = aggregate(Arc::clone(&self.api), self.cities).await?;
        self.cache.set(results.clone());
        Ok(results)
    }

    /// Current conditions and the daily forecast for one city.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn load_detail(&self, city_name: &str) -> Result<CityDetail, ServiceError> {
        let city = catalog::resolve_in(self.cities, city_name)
            .ok_or_else(|| ServiceError::UnknownCity(city_name.to_string()))?;

        let response = self.api.fetch_daily(city.latitude, city.longitude).await?;

        let (current_temperature_label, current_icon) = match &response.current {
            Some(current) => (celsius_label(current.temperature), IconCategory::from_code(current.weather_code)),
            None => (MISSING_TEMPERATURE.to_string(), IconCategory::Unknown),
        };

        Ok(CityDetail {
            city: city.name.to_string(),
            current_temperature_label,
            current_icon_category: current_icon.to_string(),
            forecasts: map_daily_series(response.daily.as_ref(), icon_category_of),
        })
    }
}
