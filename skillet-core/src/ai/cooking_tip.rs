//! A single general-purpose cooking tip.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::cooking_tip::{render_cooking_tip_prompt, COOKING_TIP_PROMPT_NAME};
use crate::llm::{GenerationClient, GenerationError};

#[derive(Debug, Deserialize)]
struct TipResponse {
    tip: String,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "tip": {
                "type": "string",
                "description": "A single, useful, and relatively short cooking tip. It should be a general tip, not related to a specific recipe."
            }
        },
        "required": ["tip"]
    })
}

/// Generate one new cooking tip. The full history of previously shown tips is
/// passed back as exclusion text; there is no structural dedup check.
pub async fn generate_cooking_tip(
    client: &dyn GenerationClient,
    previous_tips: &[String],
) -> Result<String, GenerationError> {
    let prompt = render_cooking_tip_prompt(previous_tips);
    let response: TipResponse =
        generate_structured(client, COOKING_TIP_PROMPT_NAME, prompt, response_schema()).await?;
    Ok(response.tip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_tip() {
        let client = FakeClient::with_recipe_responses();
        let tip = generate_cooking_tip(&client, &["Salt your pasta water.".to_string()])
            .await
            .unwrap();
        assert!(tip.contains("Rest meat"));
    }
}
