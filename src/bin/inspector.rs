use anyhow::{Context, Result};
use dialoguer::Input;
use ingredient_inspector::{
    config,
    inspector::{HttpRelayClient, Inspector, TerminalRenderer},
    telemetry,
};
use std::io::{IsTerminal, Read};
use tracing::{info, warn};

const DEFAULT_INGREDIENTS: &str = "Niacinamide, Retinol, Hyaluronic Acid, Ceteareth-20";

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load()
        .await
        .context("Failed to load configuration")?;

    let log_level = telemetry::resolve_log_level("warn");
    telemetry::validate_log_level(&log_level)?;
    telemetry::init_stderr(&log_level)?;

    let relay = HttpRelayClient::new(&config.client.relay_url);
    info!("Using relay at {}", relay.endpoint());

    let mut inspector = Inspector::new(relay, TerminalRenderer::stdout());

    // Piped input: analyze it once and exit.
    if !std::io::stdin().is_terminal() {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw)?;
        inspector.run(&raw).await?;
        return Ok(());
    }

    println!("Ingredient Inspector AI");
    println!("Analyze skincare ingredients using AI. Press Ctrl-C to quit.");

    loop {
        let raw: String = match Input::new()
            .with_prompt("Paste your ingredient list here, separated by commas")
            .default(DEFAULT_INGREDIENTS.to_string())
            .interact_text()
        {
            Ok(raw) => raw,
            // EOF or interrupt ends the session
            Err(e) => {
                warn!("Input closed: {}", e);
                break;
            }
        };

        inspector.run(&raw).await?;
    }

    Ok(())
}
