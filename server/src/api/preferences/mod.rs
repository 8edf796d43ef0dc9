mod get;
mod update;

use crate::state::AppState;
use axum::{
    routing::{get, put},
    Router,
};
use utoipa::OpenApi;

pub use get::get_preferences;
pub use update::update_preferences;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/preferences", get(get_preferences))
        .route("/api/preferences", put(update_preferences))
}

#[derive(OpenApi)]
#[openapi(
    paths(get::get_preferences, update::update_preferences),
    components(schemas(
        skillet_core::Preferences,
        skillet_core::prefs::DeleteConfirmation,
    ))
)]
pub struct ApiDoc;
