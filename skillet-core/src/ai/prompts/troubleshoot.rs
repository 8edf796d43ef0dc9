//! Prompt for troubleshooting a failing cooking step.

/// Prompt name, used in logging.
pub const TROUBLESHOOT_PROMPT_NAME: &str = "troubleshoot_step";

pub fn render_troubleshoot_prompt(recipe_name: &str, instruction: &str, problem: &str) -> String {
    format!(
        "You are an expert chef and cooking instructor. A user is having trouble making a recipe and needs help.\n\n\
         Recipe: {recipe_name}\n\
         The step they are on: \"{instruction}\"\n\
         Their problem: \"{problem}\"\n\n\
         Provide clear, concise, and encouraging advice to help them fix the problem and continue cooking. Be specific and give actionable steps. If the problem is unrecoverable, gently explain why and suggest what to do differently next time."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn includes_the_problem_text() {
        let prompt = render_troubleshoot_prompt("Hollandaise", "Whisk in the butter", "the sauce split");
        assert!(prompt.contains("the sauce split"));
        assert!(prompt.contains("Hollandaise"));
    }
}
