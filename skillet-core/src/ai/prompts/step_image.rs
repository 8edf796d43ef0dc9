//! Prompt for generating an image of a cooking step.

/// Prompt name, used in logging.
pub const STEP_IMAGE_PROMPT_NAME: &str = "step_image";

pub fn render_step_image_prompt(recipe_name: &str, instruction: &str) -> String {
    format!(
        "You are a food photographer. Generate a realistic, mouth-watering image of a cooking step.\n\n\
         Recipe: {recipe_name}\n\
         Current Step: \"{instruction}\"\n\n\
         The image should be well-lit, appetizing, and clearly show the action or result of this specific step. Focus on the food."
    )
}
