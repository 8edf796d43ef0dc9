//! Gemini (Google Generative Language API) provider.

use super::{GenerationClient, GenerationError, GenerationRequest};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini API provider.
#[derive(Debug)]
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiClient {
    /// Create a new GeminiClient with the given API key and model.
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    async fn call(&self, request: GeminiRequest) -> Result<GeminiResponse, GenerationError> {
        let url = format!("{}/models/{}:generateContent", API_BASE, self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        let status = response.status().as_u16();

        if status == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(GenerationError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| GenerationError::RequestFailed(e.to_string()))?;

        if status != 200 {
            // Try to parse the structured error body
            if let Ok(error_response) = serde_json::from_str::<GeminiErrorResponse>(&body) {
                return Err(GenerationError::Api {
                    status,
                    message: error_response.error.message,
                });
            }
            return Err(GenerationError::Api {
                status,
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| GenerationError::Parse(e.to_string()))
    }
}

/// Gemini API request format.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(rename = "inlineData", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType", skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
    #[serde(rename = "responseSchema", skip_serializing_if = "Option::is_none")]
    response_schema: Option<serde_json::Value>,
    #[serde(rename = "maxOutputTokens", skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

/// Gemini API response format.
#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    message: String,
}

/// Error response from the Gemini API.
#[derive(Debug, Deserialize)]
struct GeminiErrorResponse {
    error: GeminiApiError,
}

impl GeminiResponse {
    fn into_parts(self) -> Vec<GeminiPart> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError> {
        let generation_config = GenerationConfig {
            response_mime_type: request
                .response_schema
                .is_some()
                .then(|| "application/json".to_string()),
            response_schema: request.response_schema,
            max_output_tokens: request.max_output_tokens,
            temperature: request.temperature,
        };

        let api_request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(request.prompt),
                    inline_data: None,
                }],
            }],
            generation_config: Some(generation_config),
        };

        let response = self.call(api_request).await?;

        // Extract the first text part
        let text = response
            .into_parts()
            .into_iter()
            .find_map(|p| p.text)
            .ok_or_else(|| GenerationError::Parse("No text content in response".to_string()))?;

        Ok(text)
    }

    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_request = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: None,
        };

        let response = self.call(api_request).await?;

        // The image comes back as a base64 inline-data part
        let image = response
            .into_parts()
            .into_iter()
            .find_map(|p| p.inline_data)
            .ok_or(GenerationError::NoImage)?;

        Ok(format!("data:{};base64,{}", image.mime_type, image.data))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
