//! Prompt for adapting a recipe to exclusions, additions and missing equipment.

/// Prompt name, used in logging.
pub const RECIPE_VARIATION_PROMPT_NAME: &str = "recipe_variation";

/// Render the variation prompt by conditional concatenation: each constraint
/// paragraph appears only when the corresponding list is non-empty.
pub fn render_recipe_variation_prompt(
    recipe_name: &str,
    ingredients_to_exclude: &[String],
    addons: &[String],
    unavailable_equipment: &[String],
) -> String {
    let mut prompt = format!(
        "You are an expert chef who specializes in adapting recipes. A user wants to make a variation of \"{recipe_name}\".\n\n"
    );

    if !ingredients_to_exclude.is_empty() {
        prompt.push_str(&format!(
            "Please remove the following ingredients: {}. If removing an ingredient makes the recipe impossible or fundamentally changes it for the worse, please indicate that it's not possible.\n",
            ingredients_to_exclude.join(", ")
        ));
    }

    if !addons.is_empty() {
        prompt.push_str(&format!(
            "Please add the following ingredients: {}. Adjust the recipe instructions accordingly.\n",
            addons.join(", ")
        ));
    }

    if !unavailable_equipment.is_empty() {
        prompt.push_str(&format!(
            "The user does not have the following equipment: {}. Please adapt the cooking instructions to use alternative common kitchen equipment. For example, if an oven is unavailable, suggest pan-frying or boiling if appropriate. If a key piece of equipment is unavailable and there is no good alternative, indicate that the variation is not possible.\n",
            unavailable_equipment.join(", ")
        ));
    }

    prompt.push_str(&format!(
        "\nIf you can create a viable variation, please provide a complete new recipe including a new name (e.g., \"{recipe_name} (Variation)\"), description, ingredients list, instructions, prep time, and cook time.\n\nIf it is not possible to create a good-tasting recipe with these changes, please set the \"possible\" flag to false and provide a brief reason why."
    ));

    prompt
}
