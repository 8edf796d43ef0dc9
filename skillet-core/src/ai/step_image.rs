//! Image generation for a cooking step.
//!
//! The one flow that requests an image instead of structured text. The contract
//! is otherwise identical; a response without image data is a terminal failure.

use crate::ai::prompts::step_image::render_step_image_prompt;
use crate::llm::{GenerationClient, GenerationError};

/// Generate an image of the current cooking step, returned as a URL or data URI.
pub async fn generate_step_image(
    client: &dyn GenerationClient,
    recipe_name: &str,
    instruction: &str,
) -> Result<String, GenerationError> {
    let prompt = render_step_image_prompt(recipe_name, instruction);
    client.generate_image(&prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn returns_the_image_url() {
        let client = FakeClient::new().with_image_response("data:image/png;base64,AAAA");
        let url = generate_step_image(&client, "Paella", "Toast the rice in the oil")
            .await
            .unwrap();
        assert!(url.starts_with("data:image/png"));
    }

    #[tokio::test]
    async fn missing_image_is_terminal() {
        let client = FakeClient::new();
        let err = generate_step_image(&client, "Paella", "Toast the rice in the oil")
            .await
            .unwrap_err();
        assert!(matches!(err, GenerationError::NoImage));
    }
}
