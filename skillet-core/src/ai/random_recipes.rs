//! Random easy-to-make recipe names.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::random_recipes::{
    render_random_recipes_prompt, RANDOM_RECIPES_PROMPT_NAME,
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
                "description": "A list of recipe names."
            }
        },
        "required": ["recipes"]
    })
}

/// Generate `count` random recipe names.
pub async fn generate_random_recipes(
    client: &dyn GenerationClient,
    count: u32,
) -> Result<Vec<String>, GenerationError> {
    let prompt = render_random_recipes_prompt(count.max(1));
    let response: RecipeListResponse =
        generate_structured(client, RANDOM_RECIPES_PROMPT_NAME, prompt, response_schema())
            .await?;
    Ok(response.recipes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_recipe_names() {
        let client = FakeClient::with_response(
            "completely random",
            r#"{"recipes": ["Shakshuka", "Okonomiyaki"]}"#,
        );
        let recipes = generate_random_recipes(&client, 2).await.unwrap();
        assert_eq!(recipes, vec!["Shakshuka", "Okonomiyaki"]);
    }
}
