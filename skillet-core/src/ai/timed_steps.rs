//! Extraction of timed steps from a list of instructions.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::timed_steps::{render_timed_steps_prompt, TIMED_STEPS_PROMPT_NAME};
use crate::llm::{GenerationClient, GenerationError};
use crate::types::TimedStep;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedStepsResponse {
    timed_steps: Vec<TimedStep>,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "timedSteps": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "step": {
                            "type": "integer",
                            "description": "The 1-based index of the instruction step."
                        },
                        "durationInMinutes": {
                            "type": "number",
                            "description": "The duration in minutes mentioned in the step."
                        }
                    },
                    "required": ["step", "durationInMinutes"]
                },
                "description": "A list of steps that have a time component."
            }
        },
        "required": ["timedSteps"]
    })
}

/// Identify which instructions carry an explicit duration. Range-averaging and
/// hour conversion are asked of the model; nothing is verified locally.
pub async fn identify_timed_steps(
    client: &dyn GenerationClient,
    instructions: &[String],
) -> Result<Vec<TimedStep>, GenerationError> {
    if instructions.is_empty() {
        return Ok(vec![]);
    }

    let prompt = render_timed_steps_prompt(instructions);
    let response: TimedStepsResponse =
        generate_structured(client, TIMED_STEPS_PROMPT_NAME, prompt, response_schema()).await?;
    Ok(response.timed_steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_timed_steps() {
        let client = FakeClient::with_recipe_responses();
        let steps = identify_timed_steps(
            &client,
            &[
                "Sear the chicken.".to_string(),
                "Add rice and stock.".to_string(),
                "Simmer for 20 minutes.".to_string(),
            ],
        )
        .await
        .unwrap();

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, 3);
        assert_eq!(steps[0].duration_in_minutes, 20.0);
    }

    #[tokio::test]
    async fn empty_instructions_skip_the_call() {
        let client = FakeClient::new();
        let steps = identify_timed_steps(&client, &[]).await.unwrap();
        assert!(steps.is_empty());
    }
}
