use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRecipesRequest {
    /// The user's partial search query.
    pub query: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SuggestRecipesResponse {
    /// 4 recipe name suggestions.
    pub suggestions: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/suggest-recipes",
    tag = "generate",
    request_body = SuggestRecipesRequest,
    responses(
        (status = 200, description = "Recipe name suggestions", body = SuggestRecipesResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn suggest_recipes(
    State(state): State<AppState>,
    Json(request): Json<SuggestRecipesRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to suggest recipes.", e),
    };

    match ai::suggest_recipes(&client, &request.query).await {
        Ok(suggestions) => {
            (StatusCode::OK, Json(SuggestRecipesResponse { suggestions })).into_response()
        }
        Err(e) => generation_failure("Failed to suggest recipes.", e),
    }
}
