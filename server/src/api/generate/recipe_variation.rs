use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use skillet_core::{ai, RecipeVariation};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariationRequest {
    /// The name of the original recipe.
    pub recipe_name: String,
    #[serde(default)]
    pub ingredients_to_exclude: Vec<String>,
    #[serde(default)]
    pub addons: Vec<String>,
    #[serde(default)]
    pub unavailable_equipment: Vec<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/generate-variation",
    tag = "generate",
    request_body = VariationRequest,
    responses(
        (status = 200, description = "The variation, or why one is not possible", body = RecipeVariation),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_variation(
    State(state): State<AppState>,
    Json(request): Json<VariationRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to generate the recipe variation.", e),
    };

    match ai::generate_recipe_variation(
        &client,
        &request.recipe_name,
        &request.ingredients_to_exclude,
        &request.addons,
        &request.unavailable_equipment,
    )
    .await
    {
        Ok(variation) => (StatusCode::OK, Json(variation)).into_response(),
        Err(e) => generation_failure("Failed to generate the recipe variation.", e),
    }
}
