use serde::{Deserialize, Serialize};

/// Decoded forecast-endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherResponse {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "current_weather", default)]
    pub current: Option<CurrentWeatherReading>,
    #[serde(rename = "daily", default)]
    pub daily: Option<DailySeries>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeatherReading {
    pub temperature: f64,
    #[serde(rename = "windspeed")]
    pub wind_speed: f64,
    #[serde(rename = "weathercode")]
    pub weather_code: i32,
    /// Observation time as delivered, e.g. `2025-06-14T12:00`.
    #[serde(rename = "time")]
    pub observed_at: String,
}

/// Index-aligned daily forecast arrays.
///
/// Construction goes through [`DailySeries::new`] (and deserialization through the same
/// check), so all four sequences always have the same length.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawDailySeries")]
pub struct DailySeries {
    dates: Vec<String>,
    minima: Vec<f64>,
    maxima: Vec<f64>,
    codes: Vec<i32>,
}

#[derive(Deserialize)]
struct RawDailySeries {
    time: Vec<String>,
    temperature_2m_min: Vec<f64>,
    temperature_2m_max: Vec<f64>,
    weathercode: Vec<i32>,
}

impl TryFrom<RawDailySeries> for DailySeries {
    type Error = String;

    fn try_from(raw: RawDailySeries) -> Result<Self, Self::Error> {
        DailySeries::new(raw.time, raw.temperature_2m_min, raw.temperature_2m_max, raw.weathercode)
    }
}

impl DailySeries {
    pub fn new(
        dates: Vec<String>,
        minima: Vec<f64>,
        maxima: Vec<f64>,
        codes: Vec<i32>,
    ) -> Result<Self, String> {
        let len = dates.len();
        if minima.len() != len || maxima.len() != len || codes.len() != len {
            return Err(format!(
                "daily series arrays differ in length: time={}, min={}, max={}, codes={}",
                len,
                minima.len(),
                maxima.len(),
                codes.len(),
            ));
        }

        Ok(Self { dates, minima, maxima, codes })
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    pub fn minima(&self) -> &[f64] {
        &self.minima
    }

    pub fn maxima(&self) -> &[f64] {
        &self.maxima
    }

    pub fn codes(&self) -> &[i32] {
        &self.codes
    }
}

/// One row of the city list. Equality is by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityWeatherResult {
    pub city_name: String,
    pub temperature_label: String,
    pub status_description: String,
}

/// One day of a city's forecast, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyForecastEntry {
    pub date: String,
    pub icon_category: String,
    pub temperature_range_label: String,
}

/// Everything the detail view of one city shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityDetail {
    pub city: String,
    pub current_temperature_label: String,
    pub current_icon_category: String,
    pub forecasts: Vec<DailyForecastEntry>,
}

/// Whole degrees Celsius, rounding half away from zero.
pub fn celsius_label(value: f64) -> String {
    format!("{}°C", value.round() as i64)
}
