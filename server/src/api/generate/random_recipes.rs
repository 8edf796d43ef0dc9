use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

fn default_count() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RandomRecipesRequest {
    /// How many random recipe names to generate.
    #[serde(default = "default_count")]
    pub count: u32,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RandomRecipesResponse {
    pub recipes: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/random-recipes",
    tag = "generate",
    request_body = RandomRecipesRequest,
    responses(
        (status = 200, description = "Random recipe names", body = RandomRecipesResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn random_recipes(
    State(state): State<AppState>,
    Json(request): Json<RandomRecipesRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to generate random recipes.", e),
    };

    match ai::generate_random_recipes(&client, request.count).await {
        Ok(recipes) => (StatusCode::OK, Json(RandomRecipesResponse { recipes })).into_response(),
        Err(e) => generation_failure("Failed to generate random recipes.", e),
    }
}
