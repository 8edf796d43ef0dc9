//! Prompt for recipes related to one the user just cooked.

/// Prompt name, used in logging.
pub const RELATED_RECIPES_PROMPT_NAME: &str = "related_recipes";

pub fn render_related_recipes_prompt(recipe_name: &str) -> String {
    format!(
        "You are a recipe expert. A user just finished cooking \"{recipe_name}\". Suggest 3-4 other recipes they might enjoy. The suggestions should be related by cuisine, main ingredients, or cooking style."
    )
}
