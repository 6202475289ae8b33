// src/core/service_client.rs
//! HTTP client for the competitor analysis service

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::SubmitError;
use crate::types::{contract, ContractReport, SearchRequest};
use crate::utils::normalize_base_url;

const SEARCH_ENDPOINT: &str = "/search";
const HEALTH_ENDPOINT: &str = "/health";

/// Default location of a locally running analysis service
pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000";

/// Anything that can turn a search request into an analysed response
#[async_trait]
pub trait AnalysisService: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<ContractReport, SubmitError>;
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

pub struct AnalysisClient {
    client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a client. `None` keeps reqwest's default of no overall timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /health
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.endpoint(HEALTH_ENDPOINT);
        debug!("Checking analysis service health: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET from {}", url))?;

        let status = response.status();
        if status.is_success() {
            response
                .json::<HealthStatus>()
                .await
                .context("Failed to parse health response")
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            anyhow::bail!("HTTP {} error: {}", status, error_text)
        }
    }
}

#[async_trait]
impl AnalysisService for AnalysisClient {
    /// POST /search, one attempt, no retry
    async fn search(&self, request: &SearchRequest) -> Result<ContractReport, SubmitError> {
        request.validate()?;
        let url = self.endpoint(SEARCH_ENDPOINT);

        info!(
            "Calling analysis service: {} (query: {:?}, {} competitors)",
            url,
            request.query,
            request.competitors.len()
        );

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            let body = response.text().await?;
            contract::parse_response(&body)
        } else {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            error!("Analysis service error response {}: {}", status, error_text);
            Err(SubmitError::Status {
                status: status.as_u16(),
                body: error_text,
            })
        }
    }
}
