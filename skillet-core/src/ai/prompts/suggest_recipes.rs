//! Prompt for type-ahead recipe name suggestions.

/// Prompt name, used in logging.
pub const SUGGEST_RECIPES_PROMPT_NAME: &str = "suggest_recipes";

pub fn render_suggest_recipes_prompt(query: &str) -> String {
    format!(
        "You are a recipe suggestion engine. Based on the user's query \"{query}\", provide 4 relevant and popular recipe name suggestions. Be concise."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_interpolated() {
        let prompt = render_suggest_recipes_prompt("chick");
        assert!(prompt.contains("\"chick\""));
    }
}
