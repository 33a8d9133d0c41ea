use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{ClientError, HealthStatus, ResearchBackend};
use crate::config::{
    BackendConfig, DEFAULT_BACKEND_URL, DEFAULT_TIMEOUT_SECS, HEALTH_ENDPOINT, RUN_ENDPOINT,
};
use crate::report::ResearchReport;

/// HTTP client for a deep-research backend.
///
/// Stateless across calls: one `POST /run` per submission, the full response
/// awaited, no retries. The base URL and timeout are explicit values owned
/// by the client rather than process-global configuration.
pub struct ResearchClient {
    base_url: String,
    timeout: Duration,
    client: Client,
}

impl ResearchClient {
    /// Creates a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            client: Client::new(),
        }
    }

    /// Creates a client from backend configuration.
    pub fn from_config(config: &BackendConfig) -> Self {
        Self::new(&config.base_url).with_timeout(Duration::from_secs(config.timeout_secs))
    }

    /// Creates a client for the default local backend.
    pub fn localhost() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ResearchBackend for ResearchClient {
    async fn run_research(
        &self,
        query: &str,
        max_tasks: u32,
    ) -> Result<ResearchReport, ClientError> {
        // Empty queries fail locally; no request is issued.
        let query = query.trim();
        if query.is_empty() {
            return Err(ClientError::EmptyQuery);
        }

        let request = RunRequest {
            query: query.to_string(),
            max_tasks,
        };

        let url = format!("{}{}", self.base_url, RUN_ENDPOINT);
        debug!(%url, max_tasks, "submitting research request");

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        let report: ResearchReport = response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))?;

        debug!(
            sections = report.sections.len(),
            sources = report.all_sources.len(),
            "research request completed"
        );

        Ok(report)
    }

    async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);

        let response = self.client.get(&url).timeout(self.timeout).send().await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::from_response(status.as_u16(), &body));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}

/// Request body for the `/run` endpoint.
#[derive(Debug, Serialize)]
struct RunRequest {
    query: String,
    max_tasks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_removed() {
        let client = ResearchClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_localhost_default() {
        let client = ResearchClient::localhost();
        assert_eq!(client.base_url(), DEFAULT_BACKEND_URL);
    }
}
