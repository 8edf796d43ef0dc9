//! Fake generation client for testing.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use super::{GenerationClient, GenerationError, GenerationRequest};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// A fake generation client for testing.
///
/// Responses are matched by checking if the prompt contains a registered
/// substring. If no match is found, returns a default response or an error.
#[derive(Debug)]
pub struct FakeClient {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
    /// Response for image generation calls, if any
    image_response: Option<String>,
}

impl Default for FakeClient {
    fn default() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some("{}".to_string()),
            image_response: None,
        }
    }
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
            image_response: None,
        }
    }

    /// Create a FakeClient that returns a specific response for prompts containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }

    /// Set the response returned for image generation calls.
    pub fn with_image_response(mut self, url: &str) -> Self {
        self.image_response = Some(url.to_string());
        self
    }

    /// Create a FakeClient with standard responses for recipe-flow testing.
    pub fn with_recipe_responses() -> Self {
        let mut client = Self::new();

        // Recipe list from ingredients
        client.add_response(
            "Suggest 8-10 diverse recipes",
            r#"{"recipes": ["Chicken Fried Rice", "Chicken and Rice Soup", "One-Pot Chicken Rice"]}"#,
        );

        // Full recipe details
        client.add_response(
            "world-class chef",
            r#"{
                "description": "A comforting one-pot classic.",
                "ingredients": ["2 chicken breasts", "1 cup rice", "2 cups stock"],
                "instructions": ["Sear the chicken.", "Add rice and stock.", "Simmer for 20 minutes."],
                "prepTime": "10 minutes",
                "cookTime": "25 minutes"
            }"#,
        );

        // Timed steps
        client.add_response(
            "recipe analysis expert",
            r#"{"timedSteps": [{"step": 3, "durationInMinutes": 20}]}"#,
        );

        // Cooking tip
        client.add_response(
            "one new, unique cooking tip",
            r#"{"tip": "Rest meat before slicing so the juices redistribute."}"#,
        );

        client
    }
}

#[async_trait]
impl GenerationClient for FakeClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let responses = self.responses.read().unwrap();

        // Find first matching pattern (case-insensitive)
        let prompt_lower = request.prompt.to_lowercase();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(response.clone());
            }
        }

        match &self.default_response {
            Some(response) => Ok(response.clone()),
            None => {
                // Truncate on a char boundary; byte 100 may fall inside a
                // multi-byte character
                let prefix: String = request.prompt.chars().take(100).collect();
                Err(GenerationError::RequestFailed(format!(
                    "FakeClient: No response configured for prompt (first 100 chars): {}",
                    prefix
                )))
            }
        }
    }

    async fn generate_image(&self, _prompt: &str) -> Result<String, GenerationError> {
        match &self.image_response {
            Some(url) => Ok(url.clone()),
            None => Err(GenerationError::NoImage),
        }
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        "fake-model"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest {
            prompt: prompt.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn matches_registered_substring() {
        let client = FakeClient::with_response("hello", "world");
        let result = client.generate(request("Say hello to the user")).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn matching_is_case_insensitive() {
        let client = FakeClient::with_response("HELLO", "world");
        let result = client.generate(request("hello there")).await.unwrap();
        assert_eq!(result, "world");
    }

    #[tokio::test]
    async fn unmatched_prompt_without_default_errors() {
        let client = FakeClient::new();
        assert!(client.generate(request("random prompt")).await.is_err());
    }

    #[tokio::test]
    async fn unmatched_non_ascii_prompt_truncates_on_a_char_boundary() {
        let client = FakeClient::new();
        // "ü" occupies bytes 99-100, straddling the truncation point
        let prompt = format!("{}ü die Crème brûlée ist zusammengefallen", "a".repeat(99));
        let err = client.generate(request(&prompt)).await.unwrap_err();
        assert!(err.to_string().contains("ü"));
    }

    #[tokio::test]
    async fn image_without_registration_is_no_image() {
        let client = FakeClient::new();
        let err = client.generate_image("a pan of rice").await.unwrap_err();
        assert!(matches!(err, GenerationError::NoImage));
    }

    #[tokio::test]
    async fn registered_image_response_is_returned() {
        let client = FakeClient::new().with_image_response("data:image/png;base64,AAAA");
        let url = client.generate_image("a pan of rice").await.unwrap();
        assert_eq!(url, "data:image/png;base64,AAAA");
    }
}
