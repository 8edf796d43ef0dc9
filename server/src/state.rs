use std::sync::Arc;

use skillet_core::{AiConfig, CookbookStore, PrefsStore};

/// Everything handlers need, shared across requests.
#[derive(Debug)]
pub struct ServerState {
    pub config: AiConfig,
    pub cookbook: CookbookStore,
    pub prefs: PrefsStore,
}

/// Application state shared across all handlers
pub type AppState = Arc<ServerState>;

impl ServerState {
    /// Build state from environment configuration, opening the on-disk stores
    /// under the configured data directory.
    pub fn from_env() -> Result<Self, skillet_core::StoreError> {
        let config = AiConfig::from_env();
        let cookbook = CookbookStore::open(config.data_dir.join("cookbook.json"))?;
        let prefs = PrefsStore::new(config.data_dir.join("preferences.json"));

        Ok(Self {
            config,
            cookbook,
            prefs,
        })
    }
}
