use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::{ai, tips};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTipRequest {
    /// Previously shown tips, passed back so the model avoids repeats.
    #[serde(default)]
    pub previous_tips: Vec<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GenerateTipResponse {
    pub tip: String,
}

#[utoipa::path(
    post,
    path = "/api/generate-tip",
    tag = "generate",
    request_body = GenerateTipRequest,
    responses(
        (status = 200, description = "One new cooking tip", body = GenerateTipResponse),
        (status = 500, description = "Generation failed or tip limit reached", body = ErrorResponse)
    )
)]
pub async fn generate_tip(
    State(state): State<AppState>,
    Json(request): Json<GenerateTipRequest>,
) -> impl IntoResponse {
    // The lifetime cap on tips is enforced here as well as in the scheduler
    if request.previous_tips.len() >= tips::MAX_TIPS {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Tip limit reached.".to_string(),
            }),
        )
            .into_response();
    }

    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to generate cooking tip.", e),
    };

    match ai::generate_cooking_tip(&client, &request.previous_tips).await {
        Ok(tip) => (StatusCode::OK, Json(GenerateTipResponse { tip })).into_response(),
        Err(e) => generation_failure("Failed to generate cooking tip.", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ServerState;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::post;
    use axum::Router;
    use skillet_core::{AiConfig, CookbookStore, PrefsStore};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    #[tokio::test]
    async fn a_full_history_refuses_to_fire() {
        let dir = TempDir::new().unwrap();
        let state = Arc::new(ServerState {
            config: AiConfig {
                api_key: Some("key".to_string()),
                model: "gemini-2.5-flash".to_string(),
                image_model: "gemini-2.5-flash-image".to_string(),
                data_dir: dir.path().to_path_buf(),
            },
            cookbook: CookbookStore::open(dir.path().join("cookbook.json")).unwrap(),
            prefs: PrefsStore::new(dir.path().join("preferences.json")),
        });

        let previous: Vec<String> = (0..tips::MAX_TIPS).map(|i| format!("tip {}", i)).collect();
        let body = serde_json::json!({ "previousTips": previous }).to_string();

        let app = Router::new()
            .route("/api/generate-tip", post(generate_tip))
            .with_state(state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/generate-tip")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
