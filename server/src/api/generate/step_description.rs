use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptionRequest {
    pub recipe_name: String,
    /// The cooking instruction for the current step.
    pub instruction: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StepDescriptionResponse {
    /// Two sentences describing what the food should look like.
    pub description: String,
}

#[utoipa::path(
    post,
    path = "/api/step-description",
    tag = "generate",
    request_body = StepDescriptionRequest,
    responses(
        (status = 200, description = "Step description", body = StepDescriptionResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn step_description(
    State(state): State<AppState>,
    Json(request): Json<StepDescriptionRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to describe the cooking step.", e),
    };

    match ai::generate_step_description(&client, &request.recipe_name, &request.instruction).await
    {
        Ok(description) => {
            (StatusCode::OK, Json(StepDescriptionResponse { description })).into_response()
        }
        Err(e) => generation_failure("Failed to describe the cooking step.", e),
    }
}
