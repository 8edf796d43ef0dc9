//! UI text translation.

use serde::Deserialize;
use serde_json::json;

use crate::ai::generate_structured;
use crate::ai::prompts::translate::{render_translate_prompt, TRANSLATE_PROMPT_NAME};
use crate::llm::{GenerationClient, GenerationError};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationResponse {
    translated_text: String,
}

fn response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "translatedText": {
                "type": "string",
                "description": "The translated text."
            }
        },
        "required": ["translatedText"]
    })
}

/// Translate English text to the language named by an IETF tag, e.g. "de".
pub async fn translate_text(
    client: &dyn GenerationClient,
    text: &str,
    target_language: &str,
) -> Result<String, GenerationError> {
    let prompt = render_translate_prompt(text, target_language);
    let response: TranslationResponse =
        generate_structured(client, TRANSLATE_PROMPT_NAME, prompt, response_schema()).await?;
    Ok(response.translated_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::FakeClient;

    #[tokio::test]
    async fn parses_the_translation() {
        let client = FakeClient::with_response(
            "Google Translate",
            r#"{"translatedText": "Zum Kochbuch hinzufügen"}"#,
        );
        let translated = translate_text(&client, "Add to cookbook", "de").await.unwrap();
        assert_eq!(translated, "Zum Kochbuch hinzufügen");
    }
}
