//! Prompt for random easy-to-make recipe names.

/// Prompt name, used in logging.
pub const RANDOM_RECIPES_PROMPT_NAME: &str = "random_recipes";

pub fn render_random_recipes_prompt(count: u32) -> String {
    format!(
        "You are a helpful assistant. Your goal is to provide {count} completely random, popular, diverse, and relatively easy-to-make recipe names. Ensure the suggestions are varied and not repetitive. Just provide the names, no extra text."
    )
}
