use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RelatedRecipesRequest {
    pub recipe_name: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RelatedRecipesResponse {
    /// 3-4 related recipe names.
    pub recipes: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/related-recipes",
    tag = "generate",
    request_body = RelatedRecipesRequest,
    responses(
        (status = 200, description = "Related recipe names", body = RelatedRecipesResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn related_recipes(
    State(state): State<AppState>,
    Json(request): Json<RelatedRecipesRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to find related recipes.", e),
    };

    match ai::generate_related_recipes(&client, &request.recipe_name).await {
        Ok(recipes) => (StatusCode::OK, Json(RelatedRecipesResponse { recipes })).into_response(),
        Err(e) => generation_failure("Failed to find related recipes.", e),
    }
}
