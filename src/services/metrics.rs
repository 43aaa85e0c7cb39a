use crate::models::AlertnessSample;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching remote metrics
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Metrics endpoint returned status {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of live alertness readings
///
/// The scorer never talks to this directly; routes fetch readings and hand
/// plain records on.
#[async_trait]
pub trait MetricsSource: Send + Sync {
    async fn fetch(&self) -> Result<Vec<AlertnessSample>, MetricsError>;

    /// Short label for logs
    fn name(&self) -> &str;
}

/// Fetches readings from a remote JSON endpoint
///
/// One GET per call. No retry, no backoff, no caching.
pub struct HttpMetricsSource {
    url: String,
    client: Client,
}

impl HttpMetricsSource {
    pub fn new(url: String, timeout: Duration) -> Result<Self, MetricsError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl MetricsSource for HttpMetricsSource {
    async fn fetch(&self) -> Result<Vec<AlertnessSample>, MetricsError> {
        tracing::debug!("Fetching metrics from: {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(MetricsError::Status(response.status().as_u16()));
        }

        let body = response.text().await?;
        let samples: Vec<AlertnessSample> = serde_json::from_str(&body)
            .map_err(|e| MetricsError::InvalidResponse(format!("Failed to parse metrics: {}", e)))?;

        tracing::debug!("Fetched {} metric samples", samples.len());

        Ok(samples)
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Serves a fixed set of readings; used when no endpoint is configured
pub struct StaticMetricsSource {
    samples: Vec<AlertnessSample>,
}

impl StaticMetricsSource {
    pub fn new(samples: Vec<AlertnessSample>) -> Self {
        Self { samples }
    }
}

#[async_trait]
impl MetricsSource for StaticMetricsSource {
    async fn fetch(&self) -> Result<Vec<AlertnessSample>, MetricsError> {
        Ok(self.samples.clone())
    }

    fn name(&self) -> &str {
        "static"
    }
}
