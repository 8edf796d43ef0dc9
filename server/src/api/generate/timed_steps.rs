use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::{ai, TimedStep};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimedStepsRequest {
    /// The full instruction list, in order.
    pub instructions: Vec<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimedStepsResponse {
    pub timed_steps: Vec<TimedStep>,
}

#[utoipa::path(
    post,
    path = "/api/identify-timed-steps",
    tag = "generate",
    request_body = TimedStepsRequest,
    responses(
        (status = 200, description = "Steps with a time component", body = TimedStepsResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn identify_timed_steps(
    State(state): State<AppState>,
    Json(request): Json<TimedStepsRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to identify timed steps.", e),
    };

    match ai::identify_timed_steps(&client, &request.instructions).await {
        Ok(timed_steps) => {
            (StatusCode::OK, Json(TimedStepsResponse { timed_steps })).into_response()
        }
        Err(e) => generation_failure("Failed to identify timed steps.", e),
    }
}
