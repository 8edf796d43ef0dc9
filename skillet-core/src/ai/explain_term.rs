//! Culinary term explanation in the context of a recipe.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::explain_term::{render_explain_term_prompt, EXPLAIN_TERM_PROMPT_NAME};
use crate::llm::{GenerationClient, GenerationError};
use crate::types::RecipeContext;

#[derive(Debug, Deserialize)]
struct ExplanationResponse {
    explanation: String,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "explanation": {
                "type": "string",
                "description": "A clear and concise explanation of the culinary term."
            }
        },
        "required": ["explanation"]
    })
}

/// Explain a culinary term, keeping the viewed recipe in mind.
pub async fn explain_culinary_term(
    client: &dyn GenerationClient,
    term: &str,
    context: &RecipeContext,
) -> Result<String, GenerationError> {
    let prompt = render_explain_term_prompt(term, context);
    let response: ExplanationResponse =
        generate_structured(client, EXPLAIN_TERM_PROMPT_NAME, prompt, response_schema()).await?;
    Ok(response.explanation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_explanation() {
        let client = FakeClient::with_response(
            "culinary assistant",
            r#"{"explanation": "To deglaze is to loosen the browned bits from the pan with a splash of liquid."}"#,
        );
        let context = RecipeContext {
            name: "French Onion Soup".to_string(),
            description: "A rich, slow-cooked classic.".to_string(),
            ingredients: vec![],
            instructions: vec![],
        };
        let explanation = explain_culinary_term(&client, "deglaze", &context)
            .await
            .unwrap();
        assert!(explanation.contains("deglaze"));
    }
}
