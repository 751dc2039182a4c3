use ingredient_inspector::{
    analysis::AnalysisResult,
    config::{ClientConfig, Config, LlmConfig, LogsConfig, ServerConfig},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tokio::fs;

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        llm: LlmConfig {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            api_key: "test-api-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        client: ClientConfig {
            relay_url: "http://127.0.0.1:8000".to_string(),
        },
    }
}

/// LLM config pointed at a mock server
pub fn llm_config_for(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        ..create_test_config().llm
    }
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// Wraps `text` the way Gemini returns a single candidate
pub fn gemini_envelope(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 64,
            "candidatesTokenCount": 32,
            "totalTokenCount": 96
        }
    })
}

pub fn analysis(purpose: &str, rating: &str, notes: &str) -> AnalysisResult {
    AnalysisResult {
        purpose: Some(purpose.to_string()),
        safety_rating: Some(rating.to_string()),
        notes: Some(notes.to_string()),
    }
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
llm:
  base_url: "http://localhost:9999"
  api_key: "file-key"
  model: "gemini-1.5-pro"
server:
  host: "0.0.0.0"
  port: 8080
  logs:
    level: "debug"
client:
  relay_url: "http://relay.local:8080"
"#;
