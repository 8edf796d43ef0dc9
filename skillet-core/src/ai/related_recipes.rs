//! Recipes related to one the user just cooked.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::related_recipes::{
    render_related_recipes_prompt, RELATED_RECIPES_PROMPT_NAME,
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
                "description": "A list of 3-4 recipe names related to the input recipe."
            }
        },
        "required": ["recipes"]
    })
}

/// Suggest 3-4 recipes related by cuisine, main ingredients or cooking style.
pub async fn generate_related_recipes(
    client: &dyn GenerationClient,
    recipe_name: &str,
) -> Result<Vec<String>, GenerationError> {
    let prompt = render_related_recipes_prompt(recipe_name);
    let response: RecipeListResponse =
        generate_structured(client, RELATED_RECIPES_PROMPT_NAME, prompt, response_schema())
            .await?;
    Ok(response.recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_related_list() {
        let client = FakeClient::with_response(
            "just finished cooking",
            r#"{"recipes": ["Pad See Ew", "Drunken Noodles", "Thai Basil Chicken"]}"#,
        );
        let recipes = generate_related_recipes(&client, "Pad Thai").await.unwrap();
        assert_eq!(recipes.len(), 3);
    }
}
