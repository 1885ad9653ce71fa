//! Practicum homework API client.

use async_trait::async_trait;
use hwbot_common::{PollError, Result, SecretString};
use hwbot_config::PracticumConfig;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument};

/// Source of homework status updates.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetches the raw, unvalidated payload of changes since `from_date`
    /// (unix seconds).
    async fn fetch_updates(&self, from_date: i64) -> Result<Value>;
}

/// HTTP client for the homework statuses endpoint.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: SecretString,
}

impl PracticumClient {
    /// Create a new client from the Practicum configuration section
    pub fn new(config: &PracticumConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| PollError::config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }

    /// Endpoint queried on every cycle.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn connection_error(&self, params: &[(&str, String)], source: reqwest::Error) -> PollError {
        PollError::Connection {
            endpoint: self.endpoint.clone(),
            params: format_params(params),
            source,
        }
    }
}

#[async_trait]
impl HomeworkSource for PracticumClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_updates(&self, from_date: i64) -> Result<Value> {
        let params = [("from_date", from_date.to_string())];
        info!(
            endpoint = %self.endpoint,
            headers = %format!("Authorization: OAuth {}", self.token),
            params = %format_params(&params),
            "Sending request to Practicum API"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token.expose()))
            .query(&params)
            .send()
            .await
            .map_err(|e| self.connection_error(&params, e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(PollError::ResponseStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.connection_error(&params, e))?;
        debug!(bytes = body.len(), "Received Practicum API response");

        serde_json::from_str(&body).map_err(|source| PollError::InvalidJson { source })
    }
}

fn format_params(params: &[(&str, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}
