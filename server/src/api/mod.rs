pub mod cookbook;
pub mod generate;
pub mod preferences;
pub mod testing;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use skillet_core::GenerationError;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map a failed generation call to the wire contract: status 500 with a
/// human-readable message. A missing credential gets the settings hint; every
/// other failure (validation, network, backend) is indistinguishable to the
/// caller and gets the feature's generic message.
pub(crate) fn generation_failure(fallback: &str, err: GenerationError) -> Response {
    let message = match &err {
        GenerationError::MissingApiKey => {
            "API key not configured. Add one in settings or set GEMINI_API_KEY.".to_string()
        }
        _ => fallback.to_string(),
    };

    tracing::error!(error = %err, "generation call failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    // Base spec with shared components
    #[derive(OpenApi)]
    #[openapi(components(schemas(ErrorResponse)))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    // Merge in each module's spec
    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        generate::ApiDoc::openapi(),
        cookbook::ApiDoc::openapi(),
        preferences::ApiDoc::openapi(),
        testing::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        // Merge paths
        spec.paths.paths.extend(module_spec.paths.paths);

        // Merge components (schemas)
        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
