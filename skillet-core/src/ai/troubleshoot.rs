//! Troubleshooting advice for a failing cooking step.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::troubleshoot::{render_troubleshoot_prompt, TROUBLESHOOT_PROMPT_NAME};
use crate::llm::{GenerationClient, GenerationError};

#[derive(Debug, Deserialize)]
struct AdviceResponse {
    advice: String,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "advice": {
                "type": "string",
                "description": "Helpful advice to fix the user's problem."
            }
        },
        "required": ["advice"]
    })
}

/// Get advice for a problem the user hit at a specific step.
pub async fn troubleshoot_step(
    client: &dyn GenerationClient,
    recipe_name: &str,
    instruction: &str,
    problem: &str,
) -> Result<String, GenerationError> {
    let prompt = render_troubleshoot_prompt(recipe_name, instruction, problem);
    let response: AdviceResponse =
        generate_structured(client, TROUBLESHOOT_PROMPT_NAME, prompt, response_schema()).await?;
    Ok(response.advice)
}
