//! Prompt for suggesting recipes from a list of ingredients on hand.

/// Prompt name, used in logging.
pub const GENERATE_RECIPES_PROMPT_NAME: &str = "generate_recipes";

/// Render the recipe-suggestion prompt. The halal clause appears only when the
/// mode is on.
pub fn render_generate_recipes_prompt(ingredients: &[String], halal_mode: bool) -> String {
    let halal_clause = if halal_mode {
        "Only suggest halal recipes.\n"
    } else {
        ""
    };

    let ingredient_list = ingredients
        .iter()
        .map(|i| format!("- {}", i))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a recipe expert. A user has the following ingredients. Suggest 8-10 diverse recipes they can make. Prioritize recipes that use more of the provided ingredients.\n{halal_clause}\nIngredients:\n{ingredient_list}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_every_ingredient_and_no_halal_clause_by_default() {
        let prompt = render_generate_recipes_prompt(
            &["chicken".to_string(), "rice".to_string()],
            false,
        );

        assert!(prompt.contains("- chicken"));
        assert!(prompt.contains("- rice"));
        assert!(!prompt.contains("halal"));
    }

    #[test]
    fn halal_mode_adds_the_clause() {
        let prompt = render_generate_recipes_prompt(&["lamb".to_string()], true);
        assert!(prompt.contains("Only suggest halal recipes."));
    }
}
