//! Prompt for explaining a culinary term in the context of a recipe.

use crate::types::RecipeContext;

/// Prompt name, used in logging.
pub const EXPLAIN_TERM_PROMPT_NAME: &str = "explain_term";

pub fn render_explain_term_prompt(term: &str, context: &RecipeContext) -> String {
    format!(
        "You are a helpful culinary assistant. A user is asking for the meaning of a specific term while looking at a recipe.\n\n\
         Recipe Name: {name}\n\
         Recipe Description: {description}\n\n\
         The user's question is: \"What does '{term}' mean?\"\n\n\
         Explain the term '{term}' in a simple and easy-to-understand way, keeping the context of the recipe in mind if relevant.",
        name = context.name,
        description = context.description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_and_recipe_context_appear() {
        let context = RecipeContext {
            name: "French Onion Soup".to_string(),
            description: "A rich, slow-cooked classic.".to_string(),
            ingredients: vec![],
            instructions: vec![],
        };
        let prompt = render_explain_term_prompt("deglaze", &context);
        assert!(prompt.contains("'deglaze'"));
        assert!(prompt.contains("French Onion Soup"));
    }
}
