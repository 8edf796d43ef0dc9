//! Prompt for extracting timed steps from a list of instructions.

/// Prompt name, used in logging.
pub const TIMED_STEPS_PROMPT_NAME: &str = "identify_timed_steps";

/// Render the timed-step extraction prompt. Instructions are numbered from 1 so
/// the model can report 1-based step indices.
pub fn render_timed_steps_prompt(instructions: &[String]) -> String {
    let numbered = instructions
        .iter()
        .enumerate()
        .map(|(index, inst)| format!("{}. {}", index + 1, inst))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a recipe analysis expert. Review the following cooking instructions and identify any steps that have a specific time duration mentioned (e.g., \"for 5 minutes\", \"about 1-2 hours\"). For each timed step you find, provide its step number (1-based index) and the total duration in minutes.\n\n\
         Instructions:\n{numbered}\n\n\
         If a step has a range (e.g., 10-15 minutes), use the average. If a step mentions hours, convert it to minutes. Only include steps that have a clear, numeric time duration for a cooking or preparation action."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instructions_are_numbered_from_one() {
        let prompt = render_timed_steps_prompt(&[
            "Dice the onion.".to_string(),
            "Simmer for 20 minutes.".to_string(),
        ]);
        assert!(prompt.contains("1. Dice the onion."));
        assert!(prompt.contains("2. Simmer for 20 minutes."));
    }
}
