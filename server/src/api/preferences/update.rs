use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use skillet_core::Preferences;

#[utoipa::path(
    put,
    path = "/api/preferences",
    tag = "preferences",
    request_body = Preferences,
    responses(
        (status = 200, description = "Preferences saved", body = Preferences),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_preferences(
    State(state): State<AppState>,
    Json(prefs): Json<Preferences>,
) -> impl IntoResponse {
    match state.prefs.save(&prefs) {
        Ok(()) => (StatusCode::OK, Json(prefs)).into_response(),
        Err(e) => {
            tracing::error!("Failed to save preferences: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save preferences".to_string(),
                }),
            )
                .into_response()
        }
    }
}
