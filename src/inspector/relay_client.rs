use crate::analysis::{AnalysisRequest, AnalysisResult};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// The relay answered with a non-2xx status.
    #[error("relay returned status {0}")]
    Status(u16),

    /// The relay could not be reached at all.
    #[error("could not connect to relay: {0}")]
    Connection(String),

    #[error("{0}")]
    Unexpected(String),
}

#[async_trait]
pub trait RelayClient: Send + Sync {
    async fn analyze(&self, ingredient_name: &str) -> Result<AnalysisResult, RelayError>;
}

#[async_trait]
impl<T: RelayClient + ?Sized> RelayClient for Arc<T> {
    async fn analyze(&self, ingredient_name: &str) -> Result<AnalysisResult, RelayError> {
        (**self).analyze(ingredient_name).await
    }
}

pub struct HttpRelayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelayClient {
    pub fn new(relay_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/analyze", relay_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RelayClient for HttpRelayClient {
    async fn analyze(&self, ingredient_name: &str) -> Result<AnalysisResult, RelayError> {
        debug!("POST {} for '{}'", self.endpoint, ingredient_name);

        let request = AnalysisRequest {
            ingredient_name: ingredient_name.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    RelayError::Connection(e.to_string())
                } else {
                    RelayError::Unexpected(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RelayError::Status(status.as_u16()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RelayError::Unexpected(e.to_string()))?;

        Ok(AnalysisResult::from_value(&body))
    }
}
