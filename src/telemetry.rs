use crate::{Error, Result};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Validates a level or a full filter directive such as
/// `ingredient_inspector=debug,tower_http=info`.
///
/// `EnvFilter` reads a bare word as a target name, so segments without `=`
/// must be plain levels.
pub fn validate_log_level(level: &str) -> Result<()> {
    let invalid = || {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        ))
    };

    let bare_levels_ok = level
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !d.contains('=') && !d.contains('['))
        .all(|d| d.parse::<LevelFilter>().is_ok());
    if !bare_levels_ok {
        return Err(invalid());
    }

    EnvFilter::try_new(level).map_err(|_| invalid())?;
    Ok(())
}

/// `RUST_LOG` wins over the configured level.
pub fn resolve_log_level(configured: &str) -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| configured.to_string())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// JSON lines on stdout, for the relay.
pub fn init_json(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .json()
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to install subscriber: {}", e)))
}

/// Compact lines on stderr, so the terminal surface keeps stdout for results.
pub fn init_stderr(level: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| Error::internal(format!("Failed to install subscriber: {}", e)))
}
