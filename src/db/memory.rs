use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::GameStore;
use crate::{error::AppResult, models::GameRecord};

/// In-process store used when no database is configured
#[derive(Default)]
pub struct MemoryGameStore {
    libraries: RwLock<HashMap<Uuid, Vec<GameRecord>>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl GameStore for MemoryGameStore {
    async fn library(&self, user_id: Uuid) -> AppResult<Option<Vec<GameRecord>>> {
        let libraries = self.libraries.read().await;
        Ok(libraries.get(&user_id).cloned())
    }

    async fn replace_library(&self, user_id: Uuid, games: Vec<GameRecord>) -> AppResult<()> {
        let mut libraries = self.libraries.write().await;
        libraries.insert(user_id, games);
        Ok(())
    }
}
