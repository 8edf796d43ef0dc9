//! Prompt describing what a cooking step should look like.

/// Prompt name, used in logging.
pub const STEP_DESCRIPTION_PROMPT_NAME: &str = "step_description";

pub fn render_step_description_prompt(recipe_name: &str, instruction: &str) -> String {
    format!(
        "You are a food stylist. A user is cooking a recipe and wants to know what the current step should look like.\n\n\
         Recipe: {recipe_name}\n\
         Current Step: \"{instruction}\"\n\n\
         Provide a concise, two-sentence description of what the food should look like at this stage. Be vivid and encouraging."
    )
}
