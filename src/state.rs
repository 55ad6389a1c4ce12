// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::services::assistant::ChatProvider;
use crate::services::contact_store::ContactStore;
use crate::services::metrics::MetricsManager;
use crate::services::transcript::TranscriptStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub transcripts: TranscriptStore,
    pub contacts: ContactStore,
    pub metrics: MetricsManager,
    pub assistant: Arc<dyn ChatProvider>,
}

impl AppState {
    pub fn new(config: &Config, assistant: Arc<dyn ChatProvider>) -> Self {
        Self {
            transcripts: TranscriptStore::new(config.session_ttl),
            contacts: ContactStore::new(&config.contacts_path),
            metrics: MetricsManager::new(),
            assistant,
        }
    }
}
