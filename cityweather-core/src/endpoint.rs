use reqwest::{Method, Url};

use crate::error::TransportError;

pub const FORECAST_HOST: &str = "api.open-meteo.com";
pub const FORECAST_PATH: &str = "/v1/forecast";
pub const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,weathercode";

/// Everything needed to issue one HTTP request.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl Endpoint {
    /// An https GET with no query, headers or body.
    pub fn get(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            scheme: "https".to_string(),
            host: host.into(),
            path: path.into(),
            query: Vec::new(),
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// Assemble `scheme://host/path?query`.
    pub fn url(&self) -> Result<Url, TransportError> {
        let base = format!("{}://{}{}", self.scheme, self.host, self.path);
        let mut url = Url::parse(&base)
            .map_err(|e| TransportError::InvalidEndpoint(format!("{base}: {e}")))?;

        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(self.query.iter());
        }

        Ok(url)
    }
}

/// Request for current weather at the given coordinates, optionally with the daily series.
pub fn weather_request(latitude: f64, longitude: f64, include_daily: bool) -> Endpoint {
    let endpoint = Endpoint::get(FORECAST_HOST, FORECAST_PATH)
        .with_query("latitude", latitude)
        .with_query("longitude", longitude)
        .with_query("current_weather", true);

    if include_daily {
        endpoint.with_query("daily", DAILY_FIELDS)
    } else {
        endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_request_has_base_parameters_only() {
        let endpoint = weather_request(52.52, 13.405, false);

        assert_eq!(endpoint.host, FORECAST_HOST);
        assert_eq!(endpoint.path, FORECAST_PATH);
        assert_eq!(endpoint.method, Method::GET);
        assert_eq!(endpoint.query_value("latitude"), Some("52.52"));
        assert_eq!(endpoint.query_value("longitude"), Some("13.405"));
        assert_eq!(endpoint.query_value("current_weather"), Some("true"));
        assert_eq!(endpoint.query_value("daily"), None);
        assert_eq!(endpoint.query.len(), 3);
    }

    #[test]
    fn daily_request_adds_daily_fields() {
        let endpoint = weather_request(-9.1393, 38.7223, true);

        assert_eq!(endpoint.query_value("latitude"), Some("-9.1393"));
        assert_eq!(
            endpoint.query_value("daily"),
            Some("temperature_2m_max,temperature_2m_min,weathercode")
        );
        assert_eq!(endpoint.query.len(), 4);
    }

    #[test]
    fn builder_is_deterministic() {
        assert_eq!(weather_request(1.5, 2.5, true), weather_request(1.5, 2.5, true));
    }

    #[test]
    fn url_encodes_query() {
        let url = weather_request(50.45, 30.52, true).url().expect("valid url");

        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("api.open-meteo.com"));
        assert_eq!(url.path(), "/v1/forecast");
        assert_eq!(
            url.query(),
            Some(
                "latitude=50.45&longitude=30.52&current_weather=true\
                 &daily=temperature_2m_max%2Ctemperature_2m_min%2Cweathercode"
            )
        );
    }

    #[test]
    fn malformed_endpoint_is_an_error() {
        let endpoint = Endpoint::get("bad host", "/v1/forecast");
        let err = endpoint.url().unwrap_err();
        assert!(matches!(err, TransportError::InvalidEndpoint(_)));
    }
}
