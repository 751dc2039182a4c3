use super::types::{ErrorResponse, HealthResponse, MALFORMED_RESPONSE_DETAIL};
use crate::{Error, analysis::{AnalysisRequest, AnalysisService}};
use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::Value;
use tracing::{Instrument, error, info, info_span, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub analysis: AnalysisService,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let span = info_span!("analyze", request_id = %Uuid::new_v4());

    async move {
        info!("Received analysis request for: {}", request.ingredient_name);

        match state.analysis.analyze(&request.ingredient_name).await {
            Ok(value) => {
                info!("Analysis complete for: {}", request.ingredient_name);
                Ok(Json(value))
            }
            Err(e) => {
                let (status, detail) = error_detail(&e);
                if status.is_server_error() {
                    error!("Failed to analyze '{}': {}", request.ingredient_name, e);
                } else {
                    warn!("Rejected analysis request: {}", e);
                }
                Err((status, Json(ErrorResponse { detail })))
            }
        }
    }
    .instrument(span)
    .await
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Maps a relay failure to the status and client-facing message.
pub fn error_detail(err: &Error) -> (StatusCode, String) {
    match err {
        Error::InvalidInput(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
        Error::MalformedResponse(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            MALFORMED_RESPONSE_DETAIL.to_string(),
        ),
        Error::Upstream(msg) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An unexpected error occurred with the Gemini API: {}", msg),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("An unexpected error occurred with the Gemini API: {}", other),
        ),
    }
}
