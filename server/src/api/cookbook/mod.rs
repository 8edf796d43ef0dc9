pub mod delete;
pub mod list;
pub mod save;

use crate::state::AppState;
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the cookbook endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/cookbook", get(list::list_cookbook))
        .route("/api/cookbook", post(save::save_recipe))
        .route("/api/cookbook/{name}", delete(delete::delete_recipe))
}

#[derive(OpenApi)]
#[openapi(
    paths(list::list_cookbook, save::save_recipe, delete::delete_recipe),
    components(schemas(
        list::CookbookListResponse,
        save::SaveRecipeResponse,
        delete::DeleteRecipeResponse,
        skillet_core::CookbookRecipe,
        skillet_core::RecipeDetails,
    ))
)]
pub struct ApiDoc;
