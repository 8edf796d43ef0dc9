pub mod ai;
pub mod config;
pub mod cookbook;
pub mod llm;
pub mod prefs;
pub mod tips;
pub mod types;

pub use config::AiConfig;
pub use cookbook::{CookbookStore, StoreError};
pub use llm::{FakeClient, GeminiClient, GenerationClient, GenerationError, GenerationRequest};
pub use prefs::{Preferences, PrefsStore};
pub use tips::{TipPolicy, TipScheduler};
pub use types::{CookbookRecipe, RecipeContext, RecipeDetails, RecipeVariation, TimedStep};
