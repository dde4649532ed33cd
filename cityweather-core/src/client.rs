use std::fmt::Debug;

use async_trait::async_trait;

use crate::endpoint::weather_request;
use crate::error::WeatherError;
use crate::model::WeatherResponse;
use crate::transport::{Transport, decode};

/// Typed weather operations. One attempt per call, no retries.
#[async_trait]
pub trait WeatherApi: Send + Sync + Debug {
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<WeatherResponse, WeatherError>;

    async fn fetch_daily(&self, latitude: f64, longitude: f64) -> Result<WeatherResponse, WeatherError>;
}

#[derive(Debug, Clone)]
pub struct WeatherClient<T> {
    transport: T,
}

impl<T: Transport> WeatherClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn fetch(&self, latitude: f64, longitude: f64, include_daily: bool) -> Result<WeatherResponse, WeatherError> {
        let endpoint = weather_request(latitude, longitude, include_daily);
        let bytes = self.transport.send(&endpoint).await?;
        decode(&bytes)
    }
}

#[async_trait]
impl<T: Transport> WeatherApi for WeatherClient<T> {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch_current(&self, latitude: f64, longitude: f64) -> Result<WeatherResponse, WeatherError> {
        self.fetch(latitude, longitude, false).await
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch_daily(&self, latitude: f64, longitude: f64) -> Result<WeatherResponse, WeatherError> {
        self.fetch(latitude, longitude, true).await
    }
}
