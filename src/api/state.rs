use std::sync::Arc;

use crate::db::{GameStore, MemoryGameStore};
use crate::services::ScoringPolicy;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GameStore>,
    pub policy: Arc<ScoringPolicy>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// State backed by an empty in-memory store and the default policy
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryGameStore::new()), ScoringPolicy::default())
    }

    pub fn with_store(store: Arc<dyn GameStore>, policy: ScoringPolicy) -> Self {
        Self {
            store,
            policy: Arc::new(policy),
        }
    }
}
