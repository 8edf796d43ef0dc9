use crate::api::{generation_failure, ErrorResponse};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use skillet_core::{ai, RecipeDetails};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailsRequest {
    pub recipe_name: String,
    #[serde(default)]
    pub halal_mode: bool,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailsResponse {
    #[serde(flatten)]
    pub details: RecipeDetails,
    /// True when the details came from the saved cookbook instead of a
    /// generation call.
    pub from_cookbook: bool,
}

#[utoipa::path(
    post,
    path = "/api/recipe-details",
    tag = "generate",
    request_body = RecipeDetailsRequest,
    responses(
        (status = 200, description = "Full recipe details", body = RecipeDetailsResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn recipe_details(
    State(state): State<AppState>,
    Json(request): Json<RecipeDetailsRequest>,
) -> impl IntoResponse {
    // A saved recipe is returned verbatim, with no generation call
    if let Some(details) = state.cookbook.get(&request.recipe_name) {
        return (
            StatusCode::OK,
            Json(RecipeDetailsResponse {
                details,
                from_cookbook: true,
            }),
        )
            .into_response();
    }

    let client = match state.config.resolve(request.api_key, request.model) {
        Ok(c) => c,
        Err(e) => return generation_failure("Failed to generate recipe details on the server.", e),
    };

    match ai::generate_recipe_details(
        &client,
        &request.recipe_name,
        request.halal_mode,
        &request.allergens,
    )
    .await
    {
        Ok(details) => (
            StatusCode::OK,
            Json(RecipeDetailsResponse {
                details,
                from_cookbook: false,
            }),
        )
            .into_response(),
        Err(e) => generation_failure("Failed to generate recipe details on the server.", e),
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
    use http_body_util::BodyExt;
    use skillet_core::{AiConfig, CookbookRecipe, CookbookStore, PrefsStore};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn test_state(dir: &TempDir) -> AppState {
        // No API key anywhere: any generation attempt fails before the network
        let config = AiConfig {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            image_model: "gemini-2.5-flash-image".to_string(),
            data_dir: dir.path().to_path_buf(),
        };
        let cookbook = CookbookStore::open(dir.path().join("cookbook.json")).unwrap();
        let prefs = PrefsStore::new(dir.path().join("preferences.json"));
        Arc::new(ServerState {
            config,
            cookbook,
            prefs,
        })
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/api/recipe-details", post(recipe_details))
            .with_state(state)
    }

    fn details_request(recipe_name: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/recipe-details")
            .header("content-type", "application/json")
            .body(Body::from(format!(
                r#"{{"recipeName": "{}"}}"#,
                recipe_name
            )))
            .unwrap()
    }

    #[tokio::test]
    async fn saved_recipe_is_served_without_a_generation_call() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        state
            .cookbook
            .save(CookbookRecipe {
                name: "Chicken and Rice".to_string(),
                details: RecipeDetails {
                    description: "A comforting one-pot classic.".to_string(),
                    ingredients: vec!["1 cup rice".to_string()],
                    instructions: vec!["Simmer.".to_string()],
                    prep_time: "10 minutes".to_string(),
                    cook_time: "25 minutes".to_string(),
                },
            })
            .unwrap();

        let response = app(state)
            .oneshot(details_request("Chicken and Rice"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["fromCookbook"], true);
        assert_eq!(json["prepTime"], "10 minutes");
    }

    #[tokio::test]
    async fn unsaved_recipe_without_credentials_is_a_500() {
        let dir = TempDir::new().unwrap();
        let state = test_state(&dir);

        let response = app(state)
            .oneshot(details_request("Beef Wellington"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("API key"));
    }
}
