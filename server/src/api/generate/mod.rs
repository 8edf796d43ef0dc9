//! AI generation endpoints, one POST route per feature.
//!
//! Every body mirrors its flow's input plus optional `apiKey` / `model`
//! overrides; every failure is `{"error": "..."}` with status 500.

pub mod cooking_tip;
pub mod explain_term;
pub mod random_recipes;
pub mod recipe_details;
pub mod recipe_variation;
pub mod recipes;
pub mod related_recipes;
pub mod step_description;
pub mod step_image;
pub mod suggest_recipes;
pub mod timed_steps;
pub mod translate;
pub mod troubleshoot;

use crate::state::AppState;
use axum::routing::post;
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for the generation endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/generate-recipes", post(recipes::generate_recipes))
        .route("/api/suggest-recipes", post(suggest_recipes::suggest_recipes))
        .route("/api/random-recipes", post(random_recipes::random_recipes))
        .route("/api/recipe-details", post(recipe_details::recipe_details))
        .route(
            "/api/generate-variation",
            post(recipe_variation::generate_variation),
        )
        .route(
            "/api/related-recipes",
            post(related_recipes::related_recipes),
        )
        .route(
            "/api/step-description",
            post(step_description::step_description),
        )
        .route("/api/step-image", post(step_image::step_image))
        .route(
            "/api/troubleshoot-step",
            post(troubleshoot::troubleshoot_step),
        )
        .route(
            "/api/identify-timed-steps",
            post(timed_steps::identify_timed_steps),
        )
        .route("/api/generate-tip", post(cooking_tip::generate_tip))
        .route("/api/explain-term", post(explain_term::explain_term))
        .route("/api/translate", post(translate::translate))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        recipes::generate_recipes,
        suggest_recipes::suggest_recipes,
        random_recipes::random_recipes,
        recipe_details::recipe_details,
        recipe_variation::generate_variation,
        related_recipes::related_recipes,
        step_description::step_description,
        step_image::step_image,
        troubleshoot::troubleshoot_step,
        timed_steps::identify_timed_steps,
        cooking_tip::generate_tip,
        explain_term::explain_term,
        translate::translate,
    ),
    components(schemas(
        recipes::GenerateRecipesRequest,
        recipes::GenerateRecipesResponse,
        suggest_recipes::SuggestRecipesRequest,
        suggest_recipes::SuggestRecipesResponse,
        random_recipes::RandomRecipesRequest,
        random_recipes::RandomRecipesResponse,
        recipe_details::RecipeDetailsRequest,
        recipe_details::RecipeDetailsResponse,
        recipe_variation::VariationRequest,
        related_recipes::RelatedRecipesRequest,
        related_recipes::RelatedRecipesResponse,
        step_description::StepDescriptionRequest,
        step_description::StepDescriptionResponse,
        step_image::StepImageRequest,
        step_image::StepImageResponse,
        troubleshoot::TroubleshootRequest,
        troubleshoot::TroubleshootResponse,
        timed_steps::TimedStepsRequest,
        timed_steps::TimedStepsResponse,
        cooking_tip::GenerateTipRequest,
        cooking_tip::GenerateTipResponse,
        explain_term::ExplainTermRequest,
        explain_term::ExplainTermResponse,
        translate::TranslateRequest,
        translate::TranslateResponse,
        skillet_core::RecipeDetails,
        skillet_core::RecipeVariation,
        skillet_core::types::VariationRecipe,
        skillet_core::TimedStep,
        skillet_core::RecipeContext,
    ))
)]
pub struct ApiDoc;
