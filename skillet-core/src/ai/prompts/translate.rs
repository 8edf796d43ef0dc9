//! Prompt for translating UI text.

/// Prompt name, used in logging.
pub const TRANSLATE_PROMPT_NAME: &str = "translate";

pub fn render_translate_prompt(text: &str, target_language: &str) -> String {
    format!(
        "You are Google Translate.\n\
         Translate the following English text to the language with the IETF language tag: \"{target_language}\".\n\
         Only return the translated text. Do not return any other explanatory text.\n\n\
         Text to translate: \"{text}\"\n"
    )
}
