//! Full recipe generation from a recipe name.

use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::recipe_details::{
    render_recipe_details_prompt, RECIPE_DETAILS_PROMPT_NAME,
};
use crate::llm::{GenerationClient, GenerationError};
use crate::types::RecipeDetails;

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "description": {
                "type": "string",
                "description": "A brief, mouth-watering description of the recipe."
            },
            "ingredients": {
                "type": "array",
                "items": { "type": "string" },
                "description": "List of all necessary ingredients for the recipe."
            },
            "instructions": {
                "type": "array",
                "items": { "type": "string" },
                "description": "Step-by-step cooking instructions."
            },
            "prepTime": {
                "type": "string",
                "description": "Preparation time, e.g., \"15 minutes\"."
            },
            "cookTime": {
                "type": "string",
                "description": "Cooking time, e.g., \"30 minutes\"."
            }
        },
        "required": ["description", "ingredients", "instructions", "prepTime", "cookTime"]
    })
}

/// Generate a complete recipe for the given name, honoring halal mode and the
/// allergen exclusion list when present.
pub async fn generate_recipe_details(
    client: &dyn GenerationClient,
    recipe_name: &str,
    halal_mode: bool,
    allergens: &[String],
) -> Result<RecipeDetails, GenerationError> {
    let prompt = render_recipe_details_prompt(recipe_name, halal_mode, allergens);
    generate_structured(client, RECIPE_DETAILS_PROMPT_NAME, prompt, response_schema()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_a_full_recipe() {
        let client = FakeClient::with_recipe_responses();
        let details = generate_recipe_details(&client, "Chicken and Rice", false, &[])
            .await
            .unwrap();

        assert_eq!(details.prep_time, "10 minutes");
        assert_eq!(details.instructions.len(), 3);
        assert!(details.ingredients.iter().any(|i| i.contains("rice")));
    }

    #[tokio::test]
    async fn missing_required_field_is_a_parse_error() {
        let client = FakeClient::new().with_default_response(r#"{"description": "only this"}"#);
        let err = generate_recipe_details(&client, "Toast", false, &[])
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::Parse(_)));
    }
}
