/// Database implementation
use crate::error::{Result, StorageError};
use aria_core::traits::PlaylistStore;
use aria_core::types::{PlaylistItem, PlaylistItemId};
use aria_core::AriaError;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::str::FromStr;

/// SQLite-backed playlist persistence
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Create a new database connection
    ///
    /// # Errors
    /// Returns an error if the connection fails or migrations fail
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Self::run_migrations(&pool).await?;

        Ok(Self { pool })
    }

    /// Create database from an existing pool (for testing)
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Get a reference to the underlying pool (for testing)
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    async fn run_migrations(pool: &SqlitePool) -> Result<()> {
        // Embedded migrations for reliability across execution contexts
        const MIGRATIONS: &[&str] =
            &[include_str!("../migrations/20250301000001_create_playlist_state.sql")];

        for migration in MIGRATIONS {
            sqlx::query(migration)
                .execute(pool)
                .await
                .map_err(|e| StorageError::Migration(e.to_string()))?;
        }

        Ok(())
    }
}

#[async_trait]
impl PlaylistStore for Database {
    async fn get_items(&self) -> aria_core::Result<Vec<PlaylistItem>> {
        let row = sqlx::query("SELECT items_json FROM playlist_state WHERE id = 0")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AriaError::persistence(e.to_string()))?;

        match row {
            Some(row) => {
                let json: String = row.get("items_json");
                serde_json::from_str(&json).map_err(|e| AriaError::persistence(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    async fn set_items(&self, items: &[PlaylistItem]) -> aria_core::Result<()> {
        let json =
            serde_json::to_string(items).map_err(|e| AriaError::persistence(e.to_string()))?;

        sqlx::query(
            "INSERT INTO playlist_state (id, items_json, updated_at)
             VALUES (0, ?, ?)
             ON CONFLICT(id)
             DO UPDATE SET
                items_json = excluded.items_json,
                updated_at = excluded.updated_at",
        )
        .bind(json)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| AriaError::persistence(e.to_string()))?;

        Ok(())
    }

    async fn get_current_item_id(&self) -> aria_core::Result<Option<PlaylistItemId>> {
        let row = sqlx::query("SELECT current_item_id FROM playlist_state WHERE id = 0")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AriaError::persistence(e.to_string()))?;

        Ok(row
            .and_then(|row| row.get::<Option<String>, _>("current_item_id"))
            .map(PlaylistItemId::new))
    }

    async fn set_current_item_id(&self, id: Option<&PlaylistItemId>) -> aria_core::Result<()> {
        sqlx::query(
            "INSERT INTO playlist_state (id, current_item_id, updated_at)
             VALUES (0, ?, ?)
             ON CONFLICT(id)
             DO UPDATE SET
                current_item_id = excluded.current_item_id,
                updated_at = excluded.updated_at",
        )
        .bind(id.map(|id| id.as_str().to_string()))
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await
        .map_err(|e| AriaError::persistence(e.to_string()))?;

        Ok(())
    }
}
