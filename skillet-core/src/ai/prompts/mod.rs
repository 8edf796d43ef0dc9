//! Prompt templates.
//!
//! Each template is a fixed natural-language string with placeholders filled
//! from the flow's input. Conditional clauses (halal mode, allergens, ...) are
//! included only when the optional field is present.

pub mod cooking_tip;
pub mod explain_term;
pub mod generate_recipes;
pub mod random_recipes;
pub mod recipe_details;
pub mod recipe_variation;
pub mod related_recipes;
pub mod step_description;
pub mod step_image;
pub mod suggest_recipes;
pub mod timed_steps;
pub mod translate;
pub mod troubleshoot;
