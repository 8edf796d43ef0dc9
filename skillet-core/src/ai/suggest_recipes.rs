//! Type-ahead recipe name suggestions.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::suggest_recipes::{
    render_suggest_recipes_prompt, SUGGEST_RECIPES_PROMPT_NAME,
};
use crate::llm::{GenerationClient, GenerationError};

#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "suggestions": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of 4 recipe name suggestions."
            }
        },
        "required": ["suggestions"]
    })
}

/// Suggest recipe names for a partial search query.
pub async fn suggest_recipes(
    client: &dyn GenerationClient,
    query: &str,
) -> Result<Vec<String>, GenerationError> {
    let prompt = render_suggest_recipes_prompt(query);
    let response: SuggestionsResponse =
        generate_structured(client, SUGGEST_RECIPES_PROMPT_NAME, prompt, response_schema())
            .await?;
    Ok(response.suggestions)
}
