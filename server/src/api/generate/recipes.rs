use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipesRequest {
    /// Ingredients the user has on hand.
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub halal_mode: bool,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateRecipesResponse {
    /// 8-10 recipe names that can be made with the given ingredients.
    pub recipes: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/generate-recipes",
    tag = "generate",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, description = "Recipe suggestions", body = GenerateRecipesResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    Json(request): Json<GenerateRecipesRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to generate recipes on the server.", e),
    };

    match ai::generate_recipes_from_ingredients(&client, &request.ingredients, request.halal_mode)
        .await
    {
        Ok(recipes) => {
            (StatusCode::OK, Json(GenerateRecipesResponse { recipes })).into_response()
        }
        Err(e) => generation_failure("Failed to generate recipes on the server.", e),
    }
}
