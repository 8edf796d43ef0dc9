use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TroubleshootRequest {
    pub recipe_name: String,
    /// The step the user is on.
    pub instruction: String,
    /// The user's description of what's going wrong.
    pub problem: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TroubleshootResponse {
    pub advice: String,
}

#[utoipa::path(
    post,
    path = "/api/troubleshoot-step",
    tag = "generate",
    request_body = TroubleshootRequest,
    responses(
        (status = 200, description = "Troubleshooting advice", body = TroubleshootResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn troubleshoot_step(
    State(state): State<AppState>,
    Json(request): Json<TroubleshootRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to get troubleshooting advice.", e),
    };

    match ai::troubleshoot_step(
        &client,
        &request.recipe_name,
        &request.instruction,
        &request.problem,
    )
    .await
    {
        Ok(advice) => (StatusCode::OK, Json(TroubleshootResponse { advice })).into_response(),
        Err(e) => generation_failure("Failed to get troubleshooting advice.", e),
    }
}
