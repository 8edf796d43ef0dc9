//! AI flows: one prompt-templated generation call per app feature.
//!
//! Every flow follows the same pattern: render a prompt from its typed input,
//! send one request declaring the expected output schema, and validate the raw
//! response against that schema. Failures are scoped to the single call.

pub mod prompts;

mod cooking_tip;
mod explain_term;
mod generate_recipes;
mod random_recipes;
mod recipe_details;
mod recipe_variation;
mod related_recipes;
mod step_description;
mod step_image;
mod suggest_recipes;
mod timed_steps;
mod translate;
mod troubleshoot;

pub use cooking_tip::generate_cooking_tip;
pub use explain_term::explain_culinary_term;
pub use generate_recipes::generate_recipes_from_ingredients;
pub use random_recipes::generate_random_recipes;
pub use recipe_details::generate_recipe_details;
pub use recipe_variation::generate_recipe_variation;
pub use related_recipes::generate_related_recipes;
pub use step_description::generate_step_description;
pub use step_image::generate_step_image;
pub use suggest_recipes::suggest_recipes;
pub use timed_steps::identify_timed_steps;
pub use translate::translate_text;
pub use troubleshoot::troubleshoot_step;

use serde::de::DeserializeOwned;

use crate::llm::{GenerationClient, GenerationError, GenerationRequest};

/// Issue one structured generation call and validate the response.
///
/// The schema is declared to the backend and the returned text is parsed into
/// `T`; a response that does not match fails the call with a parse error.
pub(crate) async fn generate_structured<T: DeserializeOwned>(
    client: &dyn GenerationClient,
    prompt_name: &str,
    prompt: String,
    schema: serde_json::Value,
) -> Result<T, GenerationError> {
    let request = GenerationRequest {
        prompt,
        response_schema: Some(schema),
        max_output_tokens: Some(4096),
        temperature: None,
    };

    tracing::debug!(
        prompt_name = prompt_name,
        model = client.model_name(),
        "Calling generation API"
    );

    let content = client.generate(request).await?;

    serde_json::from_str(&content).map_err(|e| {
        GenerationError::Parse(format!("Failed to parse {} response: {}", prompt_name, e))
    })
}
