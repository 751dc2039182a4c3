mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";
pub const RELAY_URL_ENV: &str = "INSPECTOR_RELAY_URL";

/// Loads `.env`, then the YAML file named by `CONFIG_PATH` (if it exists),
/// then applies environment overrides.
pub async fn load() -> Result<Config> {
    let _ = dotenvy::dotenv();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let mut config = load_from_path(&config_path).await?;
    config.apply_env_overrides(|key| env::var(key).ok());

    Ok(config)
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();

    if !tokio::fs::try_exists(path).await? {
        debug!("No configuration file at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides file values with whatever `lookup` yields for the known
    /// environment keys. Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.trim().is_empty()) {
            self.llm.api_key = key;
        }
        if let Some(url) = lookup(RELAY_URL_ENV).filter(|v| !v.trim().is_empty()) {
            self.client.relay_url = url;
        }
    }

    /// The relay refuses to serve without a provider credential.
    pub fn validate_relay(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "{API_KEY_ENV} not found in environment variables. Please set it in your .env file."
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides_replace_file_values() {
        let mut config = Config::default();
        let vars: HashMap<&str, &str> = HashMap::from([
            (API_KEY_ENV, "secret"),
            (RELAY_URL_ENV, "http://relay:9000"),
        ]);

        config.apply_env_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(config.client.relay_url, "http://relay:9000");
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = Config::default();
        config.llm.api_key = "from-file".to_string();

        config.apply_env_overrides(|_| Some("   ".to_string()));

        assert_eq!(config.llm.api_key, "from-file");
        assert_eq!(config.client.relay_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_validate_relay_requires_api_key() {
        let config = Config::default();
        let err = config.validate_relay().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(API_KEY_ENV));
    }
}
