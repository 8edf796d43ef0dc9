//! Shared domain types.
//!
//! Wire field names are camelCase to match the JSON bodies the web client already
//! sends and stores (`prepTime`, `durationInMinutes`, ...).

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A full generated recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetails {
    /// A brief, mouth-watering description of the recipe.
    pub description: String,
    /// All necessary ingredients, in order.
    pub ingredients: Vec<String>,
    /// Step-by-step cooking instructions, in order.
    pub instructions: Vec<String>,
    /// Preparation time, e.g. "15 minutes".
    pub prep_time: String,
    /// Cooking time, e.g. "30 minutes".
    pub cook_time: String,
}

/// A recipe saved to the user's cookbook. The name is the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CookbookRecipe {
    pub name: String,
    pub details: RecipeDetails,
}

/// An instruction step with an explicit time duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimedStep {
    /// 1-based index into the instruction list.
    pub step: u32,
    /// Duration in minutes. Ranges are averaged, hours converted.
    pub duration_in_minutes: f64,
}

/// A proposed variation of an existing recipe.
///
/// The model may decline: `possible: false` with a `reason` and no `new_recipe`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeVariation {
    pub possible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_recipe: Option<VariationRecipe>,
}

/// The new recipe produced by a successful variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariationRecipe {
    /// E.g. "Chicken Alfredo (No Mushrooms)".
    pub name: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
}

/// The recipe a user is currently viewing, passed as context to term explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeContext {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_details_uses_camel_case_on_the_wire() {
        let details = RecipeDetails {
            description: "Comforting".to_string(),
            ingredients: vec!["1 cup rice".to_string()],
            instructions: vec!["Cook the rice.".to_string()],
            prep_time: "5 minutes".to_string(),
            cook_time: "20 minutes".to_string(),
        };

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["prepTime"], "5 minutes");
        assert_eq!(json["cookTime"], "20 minutes");
    }

    #[test]
    fn variation_without_recipe_parses() {
        let json = r#"{"possible": false, "reason": "Removing flour makes this impossible."}"#;
        let variation: RecipeVariation = serde_json::from_str(json).unwrap();
        assert!(!variation.possible);
        assert!(variation.new_recipe.is_none());
        assert_eq!(
            variation.reason.as_deref(),
            Some("Removing flour makes this impossible.")
        );
    }
}
