mod error;
mod http;

pub use error::ClientError;
pub use http::ResearchClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::report::ResearchReport;

/// Trait for research backends.
///
/// This abstraction is the seam between the session/UI layer and the wire:
/// the CLI talks to `ResearchClient` through it, and tests can substitute a
/// canned backend.
#[async_trait]
pub trait ResearchBackend: Send + Sync {
    /// Submit one research query and await the full report.
    ///
    /// Exactly one request per call; every failure is terminal for that
    /// submission and is never retried.
    async fn run_research(
        &self,
        query: &str,
        max_tasks: u32,
    ) -> Result<ResearchReport, ClientError>;

    /// Query the backend's health endpoint.
    async fn health(&self) -> Result<HealthStatus, ClientError>;
}

/// Health snapshot reported by the backend.
///
/// Only `status` is guaranteed; the rest depends on what the backend chooses
/// to report about itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_parallel_agents: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openrouter_configured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serpapi_configured: Option<bool>,
}
