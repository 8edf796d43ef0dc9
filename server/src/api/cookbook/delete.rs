use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteRecipeResponse {
    /// Whether an entry with that name existed.
    pub removed: bool,
}

#[utoipa::path(
    delete,
    path = "/api/cookbook/{name}",
    tag = "cookbook",
    params(
        ("name" = String, Path, description = "Recipe name (the cookbook key)")
    ),
    responses(
        (status = 200, description = "Delete outcome", body = DeleteRecipeResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    match state.cookbook.remove(&name) {
        Ok(removed) => (StatusCode::OK, Json(DeleteRecipeResponse { removed })).into_response(),
        Err(e) => {
            tracing::error!("Failed to delete recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
