// HTTP transport seam - reqwest in production, scripted in tests
use crate::error::TelemetryError;

#[derive(Debug)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// The single network operation the feed client needs. Status handling and
/// body decoding stay in the client; implementations only move bytes.
pub trait FeedTransport: Send + Sync {
    fn get(&self, url: &str) -> Result<TransportResponse, TelemetryError>;
}

/// Blocking HTTP transport. One GET per call, no retry, the client library's
/// default timeout.
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedTransport for HttpTransport {
    fn get(&self, url: &str) -> Result<TransportResponse, TelemetryError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .map_err(|e| TelemetryError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| TelemetryError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Ok(TransportResponse { status, body })
    }
}
