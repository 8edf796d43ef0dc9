//! Prompt for a single general-purpose cooking tip.

/// Prompt name, used in logging.
pub const COOKING_TIP_PROMPT_NAME: &str = "cooking_tip";

/// Render the cooking-tip prompt. Previously shown tips are passed back as an
/// exclusion list; the model is relied on, with no verification, not to repeat
/// them.
pub fn render_cooking_tip_prompt(previous_tips: &[String]) -> String {
    let exclusions = previous_tips
        .iter()
        .map(|tip| format!("- {}", tip))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a helpful assistant for a cooking app. Your goal is to provide a single, useful cooking tip for the user.\n\n\
         The tip should be general purpose and not tied to any specific recipe. It should be concise and easy to understand.\n\n\
         To ensure variety, please do not repeat any of the following previously shown tips:\n{exclusions}\n\n\
         Please provide one new, unique cooking tip."
    )
}
