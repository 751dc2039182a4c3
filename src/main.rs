use anyhow::Result;
use ingredient_inspector::{config, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // No credential, no relay
    if let Err(e) = config.validate_relay() {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let log_level = telemetry::resolve_log_level(&config.server.logs.level);
    if let Err(e) = telemetry::validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    telemetry::init_json(&log_level)?;

    info!(
        "Starting Ingredient Inspector relay with log level: {}",
        log_level
    );

    server::run(config).await?;

    Ok(())
}
