//! Two-sentence description of what a cooking step should look like.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::step_description::{
    render_step_description_prompt, STEP_DESCRIPTION_PROMPT_NAME,
};
use crate::llm::{GenerationClient, GenerationError};

#[derive(Debug, Deserialize)]
struct DescriptionResponse {
    description: String,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "description": {
                "type": "string",
                "description": "A two-sentence description of what the result of the cooking step should look like."
            }
        },
        "required": ["description"]
    })
}

/// Describe what the food should look like at the current step.
pub async fn generate_step_description(
    client: &dyn GenerationClient,
    recipe_name: &str,
    instruction: &str,
) -> Result<String, GenerationError> {
    let prompt = render_step_description_prompt(recipe_name, instruction);
    let response: DescriptionResponse =
        generate_structured(client, STEP_DESCRIPTION_PROMPT_NAME, prompt, response_schema())
            .await?;
    Ok(response.description)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_description() {
        let client = FakeClient::with_response(
            "food stylist",
            r#"{"description": "The onions should be glossy and golden. Keep stirring so they color evenly."}"#,
        );
        let description = generate_step_description(&client, "French Onion Soup", "Caramelize the onions")
            .await
            .unwrap();
        assert!(description.contains("golden"));
    }
}
