use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepImageRequest {
    pub recipe_name: String,
    pub instruction: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepImageResponse {
    /// Data URI of the generated image.
    pub image_url: String,
}

#[utoipa::path(
    post,
    path = "/api/step-image",
    tag = "generate",
    request_body = StepImageRequest,
    responses(
        (status = 200, description = "Generated step image", body = StepImageResponse),
        (status = 500, description = "Image generation failed", body = ErrorResponse)
    )
)]
pub async fn step_image(
    State(state): State<AppState>,
    Json(request): Json<StepImageRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve_image(request.api_key) {
        Ok(c) => c,
        Err(e) => return generation_failure("Image generation failed.", e),
    };

    match ai::generate_step_image(&client, &request.recipe_name, &request.instruction).await {
        Ok(image_url) => (StatusCode::OK, Json(StepImageResponse { image_url })).into_response(),
        Err(e) => generation_failure("Image generation failed.", e),
    }
}
