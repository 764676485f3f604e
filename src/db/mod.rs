use uuid::Uuid;

use crate::{error::AppResult, models::GameRecord};

pub mod memory;
pub mod postgres;

pub use memory::MemoryGameStore;
pub use postgres::PgGameStore;

/// Persistence for per-user game libraries
///
/// The compatibility engine never touches a store directly; handlers load
/// both libraries through this trait and pass plain slices on.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait GameStore: Send + Sync {
    /// Returns a user's games in insertion order, or `None` for an unknown user
    async fn library(&self, user_id: Uuid) -> AppResult<Option<Vec<GameRecord>>>;

    /// Registers the user if needed and swaps in a whole new library
    async fn replace_library(&self, user_id: Uuid, games: Vec<GameRecord>) -> AppResult<()>;
}
