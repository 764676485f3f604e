use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use uuid::Uuid;

use super::GameStore;
use crate::{
    error::{AppError, AppResult},
    models::{GameRecord, Platform},
};

/// Creates a PostgreSQL connection pool and applies pending migrations
pub async fn create_pool(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    Ok(pool)
}

#[derive(Debug, FromRow)]
struct GameRow {
    owner_id: Uuid,
    catalog_id: Option<i64>,
    name: String,
    platform: String,
    genres: Option<Vec<String>>,
    user_rating: Option<f64>,
    is_favorite: bool,
    is_completed: bool,
}

impl From<GameRow> for GameRecord {
    fn from(row: GameRow) -> Self {
        // Platform parsing is infallible: unknown values become Other
        let platform = row.platform.parse().unwrap_or(Platform::Other);
        Self {
            owner_id: row.owner_id,
            catalog_id: row.catalog_id,
            name: row.name,
            platform,
            genres: row.genres,
            user_rating: row.user_rating,
            is_favorite: row.is_favorite,
            is_completed: row.is_completed,
        }
    }
}

/// Converts a library index into the `position` column value
fn position_column(index: usize) -> AppResult<i32> {
    i32::try_from(index).map_err(|_| {
        AppError::InvalidInput(format!("library too large: game {} exceeds the row limit", index))
    })
}

/// Library store backed by the `gamers` and `user_games` tables
pub struct PgGameStore {
    pool: PgPool,
}

impl PgGameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GameStore for PgGameStore {
    async fn library(&self, user_id: Uuid) -> AppResult<Option<Vec<GameRecord>>> {
        let known: Option<(Uuid,)> = sqlx::query_as("SELECT id FROM gamers WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        if known.is_none() {
            return Ok(None);
        }

        let rows: Vec<GameRow> = sqlx::query_as(
            r#"
            SELECT owner_id, catalog_id, name, platform, genres, user_rating,
                   is_favorite, is_completed
            FROM user_games
            WHERE owner_id = $1
            ORDER BY position
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(rows.into_iter().map(GameRecord::from).collect()))
    }

    async fn replace_library(&self, user_id: Uuid, games: Vec<GameRecord>) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO gamers (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM user_games WHERE owner_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        for (index, game) in games.iter().enumerate() {
            let position = position_column(index)?;
            sqlx::query(
                r#"
                INSERT INTO user_games
                    (owner_id, position, catalog_id, name, platform, genres,
                     user_rating, is_favorite, is_completed)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(user_id)
            .bind(position)
            .bind(game.catalog_id)
            .bind(&game.name)
            .bind(game.platform.as_str())
            .bind(&game.genres)
            .bind(game.user_rating)
            .bind(game.is_favorite)
            .bind(game.is_completed)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        tracing::debug!(user_id = %user_id, games = games.len(), "Library replaced");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_column_bounds() {
        assert_eq!(position_column(0).unwrap(), 0);
        assert_eq!(position_column(i32::MAX as usize).unwrap(), i32::MAX);
        assert!(matches!(
            position_column(i32::MAX as usize + 1),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unknown_platform_row_maps_to_other() {
        let row = GameRow {
            owner_id: Uuid::nil(),
            catalog_id: None,
            name: "Shenmue".to_string(),
            platform: "dreamcast".to_string(),
            genres: None,
            user_rating: None,
            is_favorite: false,
            is_completed: false,
        };
        assert_eq!(GameRecord::from(row).platform, Platform::Other);
    }
}
