//! User preferences document: credentials, model choice, tip history, allergens
//! and the delete-confirmation suppression record.

use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cookbook::StoreError;

/// How long "don't ask again" suppresses the cookbook delete confirmation.
pub const CONFIRM_DELETE_COOLDOWN_DAYS: i64 = 5;

/// The delete-confirmation suppression record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteConfirmation {
    pub dont_ask_again: bool,
    pub suppressed_at: DateTime<Utc>,
}

/// Persisted user settings, one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub shown_tips: Vec<String>,
    pub allergens: Vec<String>,
    pub use_allergens: bool,
    pub delete_confirmation: Option<DeleteConfirmation>,
}

impl Preferences {
    /// Whether deleting a cookbook entry should ask for confirmation at `now`.
    ///
    /// Suppression holds for [`CONFIRM_DELETE_COOLDOWN_DAYS`] after the user
    /// checked "don't ask again", then the dialog re-enables.
    pub fn should_confirm_delete(&self, now: DateTime<Utc>) -> bool {
        match &self.delete_confirmation {
            Some(confirmation) if confirmation.dont_ask_again => {
                now - confirmation.suppressed_at >= Duration::days(CONFIRM_DELETE_COOLDOWN_DAYS)
            }
            _ => true,
        }
    }

    /// Record that the user confirmed a delete with "don't ask again" checked.
    pub fn suppress_delete_confirmation(&mut self, now: DateTime<Utc>) {
        self.delete_confirmation = Some(DeleteConfirmation {
            dont_ask_again: true,
            suppressed_at: now,
        });
    }
}

/// On-disk preferences store.
#[derive(Debug)]
pub struct PrefsStore {
    path: PathBuf,
}

impl PrefsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load preferences; a missing file yields the defaults.
    pub fn load(&self) -> Result<Preferences, StoreError> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, prefs: &Preferences) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn suppression_holds_inside_the_cooldown() {
        let now = Utc::now();
        let mut prefs = Preferences::default();
        assert!(prefs.should_confirm_delete(now));

        prefs.suppress_delete_confirmation(now);
        assert!(!prefs.should_confirm_delete(now));
        assert!(!prefs.should_confirm_delete(now + Duration::days(4)));
    }

    #[test]
    fn suppression_expires_after_five_days() {
        let now = Utc::now();
        let mut prefs = Preferences::default();
        prefs.suppress_delete_confirmation(now);

        assert!(prefs.should_confirm_delete(now + Duration::days(5)));
        assert!(prefs.should_confirm_delete(now + Duration::days(30)));
    }

    #[test]
    fn load_and_save_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path().join("preferences.json"));

        let mut prefs = Preferences {
            api_key: Some("user-key".to_string()),
            model: Some("gemini-2.5-pro".to_string()),
            shown_tips: vec!["Salt your pasta water.".to_string()],
            allergens: vec!["peanuts".to_string()],
            use_allergens: true,
            delete_confirmation: None,
        };
        prefs.suppress_delete_confirmation(Utc::now());

        store.save(&prefs).unwrap();
        assert_eq!(store.load().unwrap(), prefs);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let store = PrefsStore::new(dir.path().join("preferences.json"));
        let prefs = store.load().unwrap();
        assert_eq!(prefs, Preferences::default());
    }
}
