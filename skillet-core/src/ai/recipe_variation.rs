//! Recipe variations: exclusions, additions, missing equipment.

use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::recipe_variation::{
    render_recipe_variation_prompt, RECIPE_VARIATION_PROMPT_NAME,
};
use crate::llm::{GenerationClient, GenerationError};
use crate::types::RecipeVariation;

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "possible": {
                "type": "boolean",
                "description": "Whether it's possible to create a variation with the given constraints."
            },
            "reason": {
                "type": "string",
                "description": "The reason why a variation is not possible, if applicable."
            },
            "newRecipe": {
                "type": "object",
                "properties": {
                    "name": { "type": "string" },
                    "description": { "type": "string" },
                    "ingredients": { "type": "array", "items": { "type": "string" } },
                    "instructions": { "type": "array", "items": { "type": "string" } },
                    "prepTime": { "type": "string" },
                    "cookTime": { "type": "string" }
                },
                "required": ["name", "description", "ingredients", "instructions", "prepTime", "cookTime"]
            }
        },
        "required": ["possible"]
    })
}

/// Adapt a recipe to the user's constraints. The model may decline with
/// `possible: false` and a reason instead of a new recipe.
pub async fn generate_recipe_variation(
    client: &dyn GenerationClient,
    recipe_name: &str,
    ingredients_to_exclude: &[String],
    addons: &[String],
    unavailable_equipment: &[String],
) -> Result<RecipeVariation, GenerationError> {
    let prompt = render_recipe_variation_prompt(
        recipe_name,
        ingredients_to_exclude,
        addons,
        unavailable_equipment,
    );
    generate_structured(client, RECIPE_VARIATION_PROMPT_NAME, prompt, response_schema()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_a_successful_variation() {
        let client = FakeClient::with_response(
            "adapting recipes",
            r#"{
                "possible": true,
                "newRecipe": {
                    "name": "Chicken Alfredo (No Mushrooms)",
                    "description": "Creamy pasta without the mushrooms.",
                    "ingredients": ["pasta", "cream", "chicken"],
                    "instructions": ["Boil pasta.", "Make sauce.", "Combine."],
                    "prepTime": "10 minutes",
                    "cookTime": "20 minutes"
                }
            }"#,
        );

        let variation = generate_recipe_variation(
            &client,
            "Chicken Alfredo",
            &["mushrooms".to_string()],
            &[],
            &[],
        )
        .await
        .unwrap();

        assert!(variation.possible);
        let new_recipe = variation.new_recipe.unwrap();
        assert_eq!(new_recipe.name, "Chicken Alfredo (No Mushrooms)");
    }

    #[tokio::test]
    async fn parses_a_declined_variation() {
        let client = FakeClient::with_response(
            "adapting recipes",
            r#"{"possible": false, "reason": "Flour is essential to bread."}"#,
        );

        let variation = generate_recipe_variation(
            &client,
            "Sourdough",
            &["flour".to_string()],
            &[],
            &[],
        )
        .await
        .unwrap();

        assert!(!variation.possible);
        assert!(variation.new_recipe.is_none());
    }
}
