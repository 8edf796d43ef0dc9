//! Recipe suggestions from ingredients on hand.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::generate_recipes::{
    render_generate_recipes_prompt, GENERATE_RECIPES_PROMPT_NAME,
};
use crate::llm::{GenerationClient, GenerationError};

#[derive(Debug, Deserialize)]
struct RecipeListResponse {
    recipes: Vec<String>,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "recipes": {
                "type": "array",
                "items": { "type": "string" },
                "description": "A list of 8-10 possible recipes that can be made with the given ingredients."
            }
        },
        "required": ["recipes"]
    })
}

/// Suggest 8-10 recipes that can be made from the given ingredients.
///
/// An empty ingredient list short-circuits to an empty suggestion list without
/// a generation call.
pub async fn generate_recipes_from_ingredients(
    client: &dyn GenerationClient,
    ingredients: &[String],
    halal_mode: bool,
) -> Result<Vec<String>, GenerationError> {
    if ingredients.is_empty() {
        return Ok(vec![]);
    }

    let prompt = render_generate_recipes_prompt(ingredients, halal_mode);
    let response: RecipeListResponse = generate_structured(
        client,
        GENERATE_RECIPES_PROMPT_NAME,
        prompt,
        response_schema(),
    )
    .await?;

    Ok(response.recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_recipe_list() {
        let client = FakeClient::with_recipe_responses();
        let recipes = generate_recipes_from_ingredients(
            &client,
            &["chicken".to_string(), "rice".to_string()],
            false,
        )
        .await
        .unwrap();

        assert!(!recipes.is_empty());
        assert!(recipes.contains(&"Chicken Fried Rice".to_string()));
    }

    #[tokio::test]
    async fn empty_ingredients_skip_the_call() {
        // No registered responses and no default: a call would error.
        let client = FakeClient::new();
        let recipes = generate_recipes_from_ingredients(&client, &[], false)
            .await
            .unwrap();
        assert!(recipes.is_empty());
    }

    #[tokio::test]
    async fn malformed_response_is_a_parse_error() {
        let client = FakeClient::new().with_default_response("not json");
        let err = generate_recipes_from_ingredients(&client, &["eggs".to_string()], false)
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }
}
