use crate::api::ErrorResponse;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use skillet_core::CookbookRecipe;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveRecipeResponse {
    pub name: String,
}

#[utoipa::path(
    post,
    path = "/api/cookbook",
    tag = "cookbook",
    request_body = CookbookRecipe,
    responses(
        (status = 201, description = "Recipe saved; an entry with the same name is replaced", body = SaveRecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn save_recipe(
    State(state): State<AppState>,
    Json(recipe): Json<CookbookRecipe>,
) -> impl IntoResponse {
    if recipe.name.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Recipe name cannot be empty".to_string(),
            }),
        )
            .into_response();
    }

    let name = recipe.name.clone();
    match state.cookbook.save(recipe) {
        Ok(()) => (StatusCode::CREATED, Json(SaveRecipeResponse { name })).into_response(),
        Err(e) => {
            tracing::error!("Failed to save recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response()
        }
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

    fn test_state(dir: &TempDir) -> AppState {
        Arc::new(ServerState {
            config: AiConfig {
                api_key: None,
                model: "gemini-2.5-flash".to_string(),
                image_model: "gemini-2.5-flash-image".to_string(),
                data_dir: dir.path().to_path_buf(),
            },
            cookbook: CookbookStore::open(dir.path().join("cookbook.json")).unwrap(),
            prefs: PrefsStore::new(dir.path().join("preferences.json")),
        })
    }

    fn save_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/cookbook")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const RECIPE_BODY: &str = r#"{
        "name": "Chicken and Rice",
        "details": {
            "description": "A comforting one-pot classic.",
            "ingredients": ["1 cup rice"],
            "instructions": ["Simmer."],
            "prepTime": "10 minutes",
            "cookTime": "25 minutes"
        }
    }"#;

    #[tokio::test]
    async fn saving_persists_the_recipe() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let app = Router::new()
            .route("/api/cookbook", post(save_recipe))
            .with_state(state.clone());

        let response = app.oneshot(save_request(RECIPE_BODY)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(state.cookbook.get("Chicken and Rice").is_some());
    }

    #[tokio::test]
    async fn an_empty_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let app = Router::new()
            .route("/api/cookbook", post(save_recipe))
            .with_state(state);

        let body = RECIPE_BODY.replace("Chicken and Rice", "  ");
        let response = app.oneshot(save_request(&body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
