//! Generation client abstraction over hosted model APIs.
//!
//! Every AI feature in the app is one prompt-templated call through this trait:
//! build a prompt, declare the expected output shape, send, parse. There is no
//! caching, no retry and no rate limiting here; each call is fire-and-forget and
//! any recovery is the caller's business.

mod fake;
mod gemini;

pub use fake::FakeClient;
pub use gemini::GeminiClient;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for generation calls.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Image generation returned no image data")]
    NoImage,
}

/// A single generation call. Created fresh per call, never persisted.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// The fully rendered natural-language prompt.
    pub prompt: String,
    /// Expected output shape, as an OpenAPI-style schema. When set, the backend
    /// is asked for JSON conforming to it and the raw response text is JSON.
    pub response_schema: Option<serde_json::Value>,
    pub max_output_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Trait for generation backends.
///
/// Implementations should be stateless and thread-safe. Structured validation of
/// the returned text happens at the call site, not here.
#[async_trait]
pub trait GenerationClient: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's raw text response.
    async fn generate(&self, request: GenerationRequest) -> Result<String, GenerationError>;

    /// Generate an image for a prompt, returned as a URL or data URI.
    ///
    /// A response without image data is a terminal failure for the call.
    async fn generate_image(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Provider name, e.g. "gemini" or "fake".
    fn provider_name(&self) -> &'static str;

    /// Model name, e.g. "gemini-2.5-flash".
    fn model_name(&self) -> &str;
}
