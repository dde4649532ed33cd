use thiserror::Error;

/// The request never produced a usable response.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Network, timeout or body read failure. Displays the underlying message as-is.
    #[error("{0}")]
    Connection(String),

    #[error("server responded with status {status}")]
    Status { status: u16 },
}

/// Failure of a single weather call.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The payload arrived but does not match the expected schema.
    #[error("unexpected weather payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl WeatherError {
    pub fn is_decode(&self) -> bool {
        matches!(self, WeatherError::Decode(_))
    }
}

/// The fan-out could not be started, as opposed to an individual city fetch failing.
#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("no async runtime to run weather tasks on: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Unknown city '{0}'. Run `cityweather cities` to see the supported ones.")]
    UnknownCity(String),

    #[error(transparent)]
    Weather(#[from] WeatherError),

    #[error(transparent)]
    Aggregate(#[from] AggregateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_displays_bare_message() {
        let err = WeatherError::from(TransportError::Connection("timeout".into()));
        assert_eq!(err.to_string(), "timeout");
        assert!(!err.is_decode());
    }

    #[test]
    fn status_error_mentions_code() {
        let err = WeatherError::from(TransportError::Status { status: 503 });
        assert_eq!(err.to_string(), "server responded with status 503");
    }

    #[test]
    fn decode_errors_are_distinguishable() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = WeatherError::from(json_err);
        assert!(err.is_decode());
        assert!(err.to_string().starts_with("unexpected weather payload"));
    }

    #[test]
    fn unknown_city_hint() {
        let err = ServiceError::UnknownCity("Atlantis".into());
        assert!(err.to_string().contains("Unknown city 'Atlantis'"));
    }
}
