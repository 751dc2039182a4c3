//! The presentation loop: split a comma separated list, relay each name in
//! order and render what comes back.

mod relay_client;
mod render;

pub use relay_client::*;
pub use render::*;

use crate::Result;
use tracing::{debug, warn};

pub const EMPTY_INPUT_WARNING: &str = "Please enter at least one ingredient to analyze.";

/// Splits on commas, trims, and drops empty segments. Order and duplicates
/// are kept.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
    /// Set once the relay proved unreachable; nothing after it was tried.
    pub aborted: bool,
}

pub struct Inspector<C, R> {
    relay: C,
    renderer: R,
}

impl<C: RelayClient, R: Renderer> Inspector<C, R> {
    pub fn new(relay: C, renderer: R) -> Self {
        Self { relay, renderer }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub async fn run(&mut self, raw: &str) -> Result<RunSummary> {
        let ingredients = split_ingredients(raw);
        let mut summary = RunSummary::default();

        if ingredients.is_empty() {
            self.renderer.warning(EMPTY_INPUT_WARNING)?;
            return Ok(summary);
        }

        self.renderer.begin(ingredients.len())?;

        for ingredient in &ingredients {
            summary.attempted += 1;
            debug!("Analyzing '{}'", ingredient);

            match self.relay.analyze(ingredient).await {
                Ok(result) => {
                    summary.succeeded += 1;
                    self.renderer.result(ingredient, &result)?;
                }
                Err(RelayError::Status(code)) => {
                    summary.failed += 1;
                    self.renderer.item_error(&format!(
                        "Error analyzing '{}': Received status code {}",
                        ingredient, code
                    ))?;
                }
                Err(RelayError::Connection(detail)) => {
                    warn!("Relay unreachable, abandoning remaining ingredients: {}", detail);
                    summary.failed += 1;
                    summary.aborted = true;
                    self.renderer.connection_error(&format!(
                        "Connection Error: Could not connect to the relay ({}). \
                         Please make sure `inspector-relay` is running in a separate terminal.",
                        detail
                    ))?;
                    break;
                }
                Err(RelayError::Unexpected(detail)) => {
                    summary.failed += 1;
                    self.renderer.item_error(&format!(
                        "An unexpected error occurred for '{}': {}",
                        ingredient, detail
                    ))?;
                }
            }

            self.renderer.separator()?;
        }

        self.renderer.finish(&summary)?;
        Ok(summary)
    }
}
