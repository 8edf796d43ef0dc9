use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::ai;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// English text to translate.
    pub text: String,
    /// IETF language tag, e.g. "de" or "ar".
    pub target_language: String,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[utoipa::path(
    post,
    path = "/api/translate",
    tag = "generate",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Translated text", body = TranslateResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> impl IntoResponse {
    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to translate the text.", e),
    };

    match ai::translate_text(&client, &request.text, &request.target_language).await {
        Ok(translated_text) => {
            (StatusCode::OK, Json(TranslateResponse { translated_text })).into_response()
        }
        Err(e) => generation_failure("Failed to translate the text.", e),
    }
}
