use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use tracing::{debug, error};

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends `prompt` with JSON output enforced and returns the raw reply text.
    async fn generate_json(&self, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            model: config.model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate_json(&self, prompt: &str) -> Result<String> {
        debug!("Calling Gemini model {} ({} prompt chars)", self.model, prompt.len());

        let request = GenerateContentRequest::json_prompt(prompt);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                Error::upstream(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Gemini API error: {} - {}", status, body);
            return Err(Error::upstream(format!("{} - {}", status, body)));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            error!("Failed to decode Gemini response envelope: {}", e);
            Error::upstream(format!("Failed to decode response envelope: {}", e))
        })?;

        if let Some(reason) = envelope.finish_reason().filter(|r| *r != "STOP") {
            debug!("Gemini finished with reason {}", reason);
        }

        let text = envelope
            .first_text()
            .ok_or_else(|| Error::upstream("No candidates returned by the model"))?;

        debug!("Received {} chars from Gemini", text.len());

        Ok(text.to_string())
    }
}
