use async_trait::async_trait;
use ingredient_inspector::{
    Error, Result,
    analysis::AnalysisResult,
    inspector::{Renderer, RelayClient, RelayError, RunSummary},
    llm::LlmClient,
};
use std::io;
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: &str) -> Self {
        self.replies.lock().unwrap().push(reply.to_string());
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn generate_json(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::upstream(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::upstream("No more mock replies available"));
        }

        Ok(replies.remove(0))
    }
}

/// Relay stub that answers from a script, one entry per call.
#[derive(Debug, Default)]
pub struct MockRelayClient {
    pub script: Mutex<Vec<std::result::Result<AnalysisResult, RelayError>>>,
    pub calls: Mutex<Vec<String>>,
}

impl MockRelayClient {
    pub fn new(script: Vec<std::result::Result<AnalysisResult, RelayError>>) -> Self {
        Self {
            script: Mutex::new(script),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayClient for MockRelayClient {
    async fn analyze(
        &self,
        ingredient_name: &str,
    ) -> std::result::Result<AnalysisResult, RelayError> {
        self.calls.lock().unwrap().push(ingredient_name.to_string());

        let mut script = self.script.lock().unwrap();
        if script.is_empty() {
            return Err(RelayError::Unexpected("script exhausted".to_string()));
        }
        script.remove(0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Begin(usize),
    Warning(String),
    Result {
        ingredient: String,
        result: AnalysisResult,
    },
    ItemError(String),
    ConnectionError(String),
    Separator,
    Finish(RunSummary),
}

/// Renderer that keeps every event for later inspection.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<Rendered>,
}

impl RecordingRenderer {
    pub fn results(&self) -> Vec<(&str, &AnalysisResult)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::Result { ingredient, result } => Some((ingredient.as_str(), result)),
                _ => None,
            })
            .collect()
    }

    pub fn item_errors(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Rendered::ItemError(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn begin(&mut self, total: usize) -> io::Result<()> {
        self.events.push(Rendered::Begin(total));
        Ok(())
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.events.push(Rendered::Warning(message.to_string()));
        Ok(())
    }

    fn result(&mut self, ingredient: &str, result: &AnalysisResult) -> io::Result<()> {
        self.events.push(Rendered::Result {
            ingredient: ingredient.to_string(),
            result: result.clone(),
        });
        Ok(())
    }

    fn item_error(&mut self, message: &str) -> io::Result<()> {
        self.events.push(Rendered::ItemError(message.to_string()));
        Ok(())
    }

    fn connection_error(&mut self, message: &str) -> io::Result<()> {
        self.events.push(Rendered::ConnectionError(message.to_string()));
        Ok(())
    }

    fn separator(&mut self) -> io::Result<()> {
        self.events.push(Rendered::Separator);
        Ok(())
    }

    fn finish(&mut self, summary: &RunSummary) -> io::Result<()> {
        self.events.push(Rendered::Finish(*summary));
        Ok(())
    }
}
