pub mod handlers;
mod types;

pub use types::*;

use crate::{
    Result,
    analysis::AnalysisService,
    config::Config,
    llm::{GeminiClient, LlmClient},
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(analysis: AnalysisService) -> Router {
    let app_state = handlers::AppState { analysis };

    Router::new()
        .route("/analyze", post(handlers::analyze))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

/// Serves the relay. The caller has already checked the credential.
pub async fn run(config: Config) -> Result<()> {
    let llm: Arc<dyn LlmClient> = Arc::new(GeminiClient::new(config.llm.clone()));
    let app = router(AnalysisService::new(llm));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting relay on {} (model: {})", addr, config.llm.model);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
