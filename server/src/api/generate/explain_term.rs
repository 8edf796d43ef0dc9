use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::{ai, RecipeContext};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExplainTermRequest {
    /// The culinary term the user asked about.
    pub term: String,
    /// The recipe the user is currently viewing.
    pub recipe_context: RecipeContext,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExplainTermResponse {
    pub explanation: String,
}

#[utoipa::path(
    post,
    path = "/api/explain-term",
    tag = "generate",
    request_body = ExplainTermRequest,
    responses(
        (status = 200, description = "Explanation of the term", body = ExplainTermResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn explain_term(
    State(state): State<AppState>,
    Json(request): Json<ExplainTermRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to explain the term.", e),
    };

    match ai::explain_culinary_term(&client, &request.term, &request.recipe_context).await {
        Ok(explanation) => {
            (StatusCode::OK, Json(ExplainTermResponse { explanation })).into_response()
        }
        Err(e) => generation_failure("Failed to explain the term.", e),
    }
}
