use std::fmt::Debug;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::endpoint::Endpoint;
use crate::error::{TransportError, WeatherError};

/// Sends a described request and hands back the raw payload of a 2xx response.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, endpoint: &Endpoint) -> Result<Vec<u8>, TransportError>;
}

/// Decode a JSON payload, keeping schema errors apart from transport errors.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, WeatherError> {
    Ok(serde_json::from_slice(bytes)?)
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration, connect_timeout: Duration, user_agent: &str) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        Ok(Self { http })
    }

    pub fn with_client(http: Client) -> Self {
        Self { http }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::with_client(Client::new())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, endpoint: &Endpoint) -> Result<Vec<u8>, TransportError> {
        let url = endpoint.url()?;
        tracing::debug!(method = %endpoint.method, %url, "sending request");

        let mut request = self.http.request(endpoint.method.clone(), url);
        for (name, value) in &endpoint.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &endpoint.body {
            request = request.body(body.clone());
        }

        let res = request.send().await.map_err(|e| TransportError::Connection(describe(&e)))?;

        let status = res.status();
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16() });
        }

        let body = res.bytes().await.map_err(|e| TransportError::Connection(describe(&e)))?;
        Ok(body.to_vec())
    }
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        "timeout".to_string()
    } else {
        err.to_string()
    }
}
