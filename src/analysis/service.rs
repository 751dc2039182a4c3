use super::prompt::build_prompt;
use crate::{Error, Result, llm::LlmClient};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Relays one ingredient at a time to the model and hands back its JSON.
#[derive(Clone)]
pub struct AnalysisService {
    llm: Arc<dyn LlmClient>,
}

impl AnalysisService {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    /// Returns the model's reply parsed as JSON, unvalidated.
    pub async fn analyze(&self, ingredient_name: &str) -> Result<Value> {
        let ingredient_name = ingredient_name.trim();
        if ingredient_name.is_empty() {
            return Err(Error::invalid_input("ingredient_name must not be empty"));
        }

        let prompt = build_prompt(ingredient_name);
        let text = self.llm.generate_json(&prompt).await?;

        let value = serde_json::from_str::<Value>(&text).map_err(|e| {
            warn!("Model returned non-JSON text for '{}': {}", ingredient_name, e);
            Error::MalformedResponse(e.to_string())
        })?;

        debug!("Parsed analysis for '{}'", ingredient_name);
        Ok(value)
    }
}
