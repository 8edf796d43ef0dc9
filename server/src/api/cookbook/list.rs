use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use skillet_core::CookbookRecipe;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CookbookListResponse {
    pub recipes: Vec<CookbookRecipe>,
}

#[utoipa::path(
    get,
    path = "/api/cookbook",
    tag = "cookbook",
    responses(
        (status = 200, description = "All saved recipes, in name order", body = CookbookListResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_cookbook(State(state): State<AppState>) -> impl IntoResponse {
    let recipes = state.cookbook.list();
    (StatusCode::OK, Json(CookbookListResponse { recipes })).into_response()
}
