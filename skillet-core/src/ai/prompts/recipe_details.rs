//! Prompt for generating a full recipe from its name.

/// Prompt name, used in logging.
pub const RECIPE_DETAILS_PROMPT_NAME: &str = "recipe_details";

/// Render the recipe-details prompt. Halal and allergen clauses are appended
/// only when the corresponding input is present.
pub fn render_recipe_details_prompt(
    recipe_name: &str,
    halal_mode: bool,
    allergens: &[String],
) -> String {
    let mut prompt = format!(
        "You are a world-class chef. A user wants to cook \"{recipe_name}\".\n"
    );

    if halal_mode {
        prompt.push_str(
            "The user requires a halal version of this recipe. Ensure all ingredients and preparation steps are halal.\n",
        );
    }

    if !allergens.is_empty() {
        prompt.push_str(&format!(
            "The user is allergic to the following: {}. Ensure the recipe does not contain these ingredients.\n",
            allergens.join(", ")
        ));
    }

    prompt.push_str(
        "\nProvide a detailed recipe including:\n\
         1. A short, mouth-watering description of the dish.\n\
         2. A list of all necessary ingredients.\n\
         3. Step-by-step cooking instructions.\n\
         4. The preparation time.\n\
         5. The cooking time.\n\
         \n\
         Please format the output as a JSON object that matches the provided schema.",
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_request_has_no_conditional_clauses() {
        let prompt = render_recipe_details_prompt("Chicken Fried Rice", false, &[]);
        assert!(prompt.contains("Chicken Fried Rice"));
        assert!(!prompt.contains("halal"));
        assert!(!prompt.contains("allergic"));
    }

    #[test]
    fn allergens_render_as_a_comma_list() {
        let prompt = render_recipe_details_prompt(
            "Pad Thai",
            false,
            &["peanuts".to_string(), "shellfish".to_string()],
        );
        assert!(prompt.contains("allergic to the following: peanuts, shellfish"));
    }

    #[test]
    fn halal_clause_is_present_when_requested() {
        let prompt = render_recipe_details_prompt("Beef Stew", true, &[]);
        assert!(prompt.contains("halal version of this recipe"));
    }
}
