//! Configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::llm::{GeminiClient, GenerationError};

/// Default text model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default image model.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Generation backend configuration.
///
/// The API key is optional at startup: requests may carry their own key, and a
/// request with no key anywhere fails with [`GenerationError::MissingApiKey`]
/// before any network call.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Server-wide API key, used when a request does not supply one.
    pub api_key: Option<String>,
    /// Default text model name.
    pub model: String,
    /// Default image model name.
    pub image_model: String,
    /// Directory for persisted documents (cookbook, preferences).
    pub data_dir: PathBuf,
}

impl AiConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `GEMINI_API_KEY`: server-wide API key
    /// - `SKILLET_AI_MODEL`: text model (default: "gemini-2.5-flash")
    /// - `SKILLET_IMAGE_MODEL`: image model (default: "gemini-2.5-flash-image")
    /// - `SKILLET_DATA_DIR`: data directory (default: "~/.skillet")
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        let model = env::var("SKILLET_AI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let image_model =
            env::var("SKILLET_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());

        let data_dir = env::var("SKILLET_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_data_dir());

        Self {
            api_key,
            model,
            image_model,
            data_dir,
        }
    }

    /// Get the default data directory: ~/.skillet
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".skillet"))
            .unwrap_or_else(|| PathBuf::from("data"))
    }

    /// Build a text-generation client for one call, preferring the request's
    /// credential and model over the server defaults.
    pub fn resolve(
        &self,
        api_key: Option<String>,
        model: Option<String>,
    ) -> Result<GeminiClient, GenerationError> {
        let key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
            .ok_or(GenerationError::MissingApiKey)?;
        let model = model.filter(|m| !m.is_empty()).unwrap_or_else(|| self.model.clone());

        Ok(GeminiClient::new(key, model))
    }

    /// Build an image-generation client for one call.
    pub fn resolve_image(&self, api_key: Option<String>) -> Result<GeminiClient, GenerationError> {
        let key = api_key
            .filter(|k| !k.is_empty())
            .or_else(|| self.api_key.clone())
            .ok_or(GenerationError::MissingApiKey)?;

        Ok(GeminiClient::new(key, self.image_model.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::GenerationClient;

    fn config_without_key() -> AiConfig {
        AiConfig {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            data_dir: PathBuf::from("/tmp/skillet-test"),
        }
    }

    #[test]
    fn missing_key_everywhere_short_circuits() {
        let config = config_without_key();
        let err = config.resolve(None, None).unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }

    #[test]
    fn request_key_overrides_absent_server_key() {
        let config = config_without_key();
        let client = config.resolve(Some("user-key".to_string()), None).unwrap();
        assert_eq!(client.model_name(), DEFAULT_MODEL);
    }

    #[test]
    fn request_model_overrides_default() {
        let config = AiConfig {
            api_key: Some("server-key".to_string()),
            ..config_without_key()
        };
        let client = config
            .resolve(None, Some("gemini-2.5-pro".to_string()))
            .unwrap();
        assert_eq!(client.model_name(), "gemini-2.5-pro");
    }

    #[test]
    fn empty_request_key_is_treated_as_missing() {
        let config = config_without_key();
        let err = config.resolve(Some(String::new()), None).unwrap_err();
        assert!(matches!(err, GenerationError::MissingApiKey));
    }
}
