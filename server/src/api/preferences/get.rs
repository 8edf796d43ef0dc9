use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use skillet_core::Preferences;

#[utoipa::path(
    get,
    path = "/api/preferences",
    tag = "preferences",
    responses(
        (status = 200, description = "Current preferences", body = Preferences),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn get_preferences(State(state): State<AppState>) -> impl IntoResponse {
    match state.prefs.load() {
        Ok(prefs) => (StatusCode::OK, Json(prefs)).into_response(),
        Err(e) => {
            tracing::error!("Failed to load preferences: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load preferences".to_string(),
                }),
            )
                .into_response()
        }
    }
}
